use crate::{
    abstract_trait::SellerRepositoryTrait,
    config::ConnectionPool,
    domain::requests::RegisterSellerRequest,
    errors::RepositoryError,
    model::{SellerProfile, SellerStatus},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct SellerRepository {
    db: ConnectionPool,
}

impl SellerRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SellerRepositoryTrait for SellerRepository {
    async fn create_profile(
        &self,
        user_id: i32,
        req: &RegisterSellerRequest,
    ) -> Result<SellerProfile, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let profile = sqlx::query_as::<_, SellerProfile>(
            r#"
            INSERT INTO seller_profiles (user_id, shop_name, category, address, document_urls, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, '{}', 'registered', current_timestamp, current_timestamp)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&req.shop_name)
        .bind(&req.category)
        .bind(&req.address)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepositoryError::AlreadyExists(format!(
                    "user {user_id} already has a seller profile"
                ))
            }
            _ => {
                error!("Failed to create seller profile for {}: {:?}", user_id, err);
                RepositoryError::from(err)
            }
        })?;

        info!("User {} registered shop '{}'", user_id, profile.shop_name);
        Ok(profile)
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Option<SellerProfile>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let profile =
            sqlx::query_as::<_, SellerProfile>("SELECT * FROM seller_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&mut *conn)
                .await
                .map_err(RepositoryError::from)?;

        Ok(profile)
    }

    async fn attach_documents(
        &self,
        user_id: i32,
        urls: &[String],
    ) -> Result<SellerProfile, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Attaching documents moves the profile into the admin review queue.
        let profile = sqlx::query_as::<_, SellerProfile>(
            r#"
            UPDATE seller_profiles
            SET document_urls = $2,
                status = 'pending',
                updated_at = current_timestamp
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(urls)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("Failed to attach documents for user {}: {:?}", user_id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!(
            "User {} attached {} KYC document(s), profile pending review",
            user_id,
            urls.len()
        );
        Ok(profile)
    }

    async fn set_status(
        &self,
        user_id: i32,
        status: SellerStatus,
    ) -> Result<SellerProfile, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let profile = sqlx::query_as::<_, SellerProfile>(
            r#"
            UPDATE seller_profiles
            SET status = $2,
                updated_at = current_timestamp
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(status)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("Failed to set seller status for {}: {:?}", user_id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("Seller profile of user {} moved to {:?}", user_id, status);
        Ok(profile)
    }

    async fn find_by_status(
        &self,
        status: SellerStatus,
    ) -> Result<Vec<SellerProfile>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let profiles = sqlx::query_as::<_, SellerProfile>(
            "SELECT * FROM seller_profiles WHERE status = $1 ORDER BY updated_at",
        )
        .bind(status)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(profiles)
    }
}
