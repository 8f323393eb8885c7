use crate::{
    abstract_trait::{AuthServiceTrait, DynHashing, DynJwtService, DynUserRepository},
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct AuthService {
    hash: DynHashing,
    jwt: DynJwtService,
    user_repository: DynUserRepository,
}

impl AuthService {
    pub fn new(hash: DynHashing, jwt: DynJwtService, user_repository: DynUserRepository) -> Self {
        Self {
            hash,
            jwt,
            user_repository,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("Registering new user {}", req.email);

        if self.user_repository.find_by_email(&req.email).await?.is_some() {
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(format!(
                "Email {} is already registered",
                req.email
            ))));
        }

        let hashed = self.hash.hash_password(&req.password).await?;

        let user = self
            .user_repository
            .create_user(&req.name, &req.email, &hashed)
            .await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User registered successfully".to_string(),
            data: UserResponse::from(user),
        })
    }

    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let user = self
            .user_repository
            .find_by_email(&req.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hash
            .compare_password(&user.password, &req.password)
            .await
            .map_err(|e| {
                error!("Login failed for {}: invalid password", req.email);
                e
            })?;

        let access_token = self.jwt.generate_token(user.user_id as i64, "access")?;
        let refresh_token = self.jwt.generate_token(user.user_id as i64, "refresh")?;

        info!("User {} logged in", user.user_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Login successful".to_string(),
            data: TokenResponse {
                access_token,
                refresh_token,
                user: UserResponse::from(user),
            },
        })
    }

    async fn me(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User".to_string()))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User fetched successfully".to_string(),
            data: UserResponse::from(user),
        })
    }
}
