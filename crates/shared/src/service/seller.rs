use crate::{
    abstract_trait::{DynSellerRepository, DynUserRepository, SellerServiceTrait},
    domain::{
        requests::{AttachDocumentsRequest, RegisterSellerRequest, UpdateSellerStatusRequest},
        responses::{ApiResponse, SellerProfileResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::SellerStatus,
};
use async_trait::async_trait;
use tracing::info;

pub struct SellerService {
    seller_repository: DynSellerRepository,
    user_repository: DynUserRepository,
}

impl SellerService {
    pub fn new(seller_repository: DynSellerRepository, user_repository: DynUserRepository) -> Self {
        Self {
            seller_repository,
            user_repository,
        }
    }
}

#[async_trait]
impl SellerServiceTrait for SellerService {
    async fn register(
        &self,
        user_id: i32,
        req: &RegisterSellerRequest,
    ) -> Result<ApiResponse<SellerProfileResponse>, ServiceError> {
        if self.seller_repository.find_by_user(user_id).await?.is_some() {
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(
                "Seller profile already exists".to_string(),
            )));
        }

        let profile = self.seller_repository.create_profile(user_id, req).await?;

        info!("User {} registered shop '{}'", user_id, profile.shop_name);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Seller profile created".to_string(),
            data: SellerProfileResponse::from(profile),
        })
    }

    async fn attach_documents(
        &self,
        user_id: i32,
        req: &AttachDocumentsRequest,
    ) -> Result<ApiResponse<SellerProfileResponse>, ServiceError> {
        let profile = self
            .seller_repository
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Seller profile".to_string()))?;

        // Documents may be re-submitted after rejection; a verified profile
        // has nothing left to prove.
        if profile.status == SellerStatus::Verified {
            return Err(ServiceError::Validation(vec![
                "Profile is already verified".to_string(),
            ]));
        }

        let profile = self
            .seller_repository
            .attach_documents(user_id, &req.document_urls)
            .await?;

        info!(
            "User {} submitted {} document(s), profile now pending review",
            user_id,
            req.document_urls.len()
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Documents submitted for review".to_string(),
            data: SellerProfileResponse::from(profile),
        })
    }

    async fn my_profile(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<SellerProfileResponse>, ServiceError> {
        let profile = self
            .seller_repository
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Seller profile".to_string()))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Seller profile fetched successfully".to_string(),
            data: SellerProfileResponse::from(profile),
        })
    }

    async fn pending_profiles(
        &self,
    ) -> Result<ApiResponse<Vec<SellerProfileResponse>>, ServiceError> {
        let profiles = self
            .seller_repository
            .find_by_status(SellerStatus::Pending)
            .await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Pending profiles fetched successfully".to_string(),
            data: profiles
                .into_iter()
                .map(SellerProfileResponse::from)
                .collect(),
        })
    }

    async fn update_status(
        &self,
        user_id: i32,
        req: &UpdateSellerStatusRequest,
    ) -> Result<ApiResponse<SellerProfileResponse>, ServiceError> {
        if !matches!(req.status, SellerStatus::Verified | SellerStatus::Rejected) {
            return Err(ServiceError::Validation(vec![
                "status must be 'verified' or 'rejected'".to_string(),
            ]));
        }

        let profile = self
            .seller_repository
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Seller profile".to_string()))?;

        if profile.status != SellerStatus::Pending {
            return Err(ServiceError::Validation(vec![format!(
                "Only pending profiles can be reviewed, this one is {:?}",
                profile.status
            )]));
        }

        let profile = self
            .seller_repository
            .set_status(user_id, req.status)
            .await?;

        if req.status == SellerStatus::Verified {
            self.user_repository.set_is_seller(user_id, true).await?;
        }

        info!("Seller profile of user {} moved to {:?}", user_id, req.status);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Seller status updated".to_string(),
            data: SellerProfileResponse::from(profile),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{SellerRepositoryTrait, UserRepositoryTrait},
        errors::RepositoryError,
        model::{SellerProfile, User},
    };
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    #[derive(Default)]
    struct MockSellerStore {
        profiles: Mutex<HashMap<i32, SellerProfile>>,
        promoted: Mutex<Vec<i32>>,
    }

    impl MockSellerStore {
        fn seed(&self, user_id: i32, status: SellerStatus) {
            self.profiles.lock().unwrap().insert(
                user_id,
                SellerProfile {
                    profile_id: user_id,
                    user_id,
                    shop_name: format!("shop-{user_id}"),
                    category: "Food".to_string(),
                    address: "12 Hill Road".to_string(),
                    document_urls: Vec::new(),
                    status,
                    created_at: None,
                    updated_at: None,
                },
            );
        }
    }

    #[async_trait]
    impl SellerRepositoryTrait for MockSellerStore {
        async fn create_profile(
            &self,
            user_id: i32,
            req: &RegisterSellerRequest,
        ) -> Result<SellerProfile, RepositoryError> {
            let profile = SellerProfile {
                profile_id: user_id,
                user_id,
                shop_name: req.shop_name.clone(),
                category: req.category.clone(),
                address: req.address.clone(),
                document_urls: Vec::new(),
                status: SellerStatus::Registered,
                created_at: None,
                updated_at: None,
            };
            self.profiles.lock().unwrap().insert(user_id, profile.clone());
            Ok(profile)
        }

        async fn find_by_user(
            &self,
            user_id: i32,
        ) -> Result<Option<SellerProfile>, RepositoryError> {
            Ok(self.profiles.lock().unwrap().get(&user_id).cloned())
        }

        async fn attach_documents(
            &self,
            user_id: i32,
            urls: &[String],
        ) -> Result<SellerProfile, RepositoryError> {
            let mut profiles = self.profiles.lock().unwrap();
            let profile = profiles.get_mut(&user_id).ok_or(RepositoryError::NotFound)?;
            profile.document_urls = urls.to_vec();
            profile.status = SellerStatus::Pending;
            Ok(profile.clone())
        }

        async fn set_status(
            &self,
            user_id: i32,
            status: SellerStatus,
        ) -> Result<SellerProfile, RepositoryError> {
            let mut profiles = self.profiles.lock().unwrap();
            let profile = profiles.get_mut(&user_id).ok_or(RepositoryError::NotFound)?;
            profile.status = status;
            Ok(profile.clone())
        }

        async fn find_by_status(
            &self,
            status: SellerStatus,
        ) -> Result<Vec<SellerProfile>, RepositoryError> {
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .values()
                .filter(|p| p.status == status)
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl UserRepositoryTrait for MockSellerStore {
        async fn create_user(
            &self,
            _name: &str,
            _email: &str,
            _password_hash: &str,
        ) -> Result<User, RepositoryError> {
            unimplemented!("not exercised by seller tests")
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }

        async fn set_is_seller(
            &self,
            user_id: i32,
            _is_seller: bool,
        ) -> Result<(), RepositoryError> {
            self.promoted.lock().unwrap().push(user_id);
            Ok(())
        }
    }

    fn service_over(store: &Arc<MockSellerStore>) -> SellerService {
        SellerService::new(store.clone(), store.clone())
    }

    #[tokio::test]
    async fn documents_move_registered_profile_to_pending() {
        let store = Arc::new(MockSellerStore::default());
        store.seed(7, SellerStatus::Registered);
        let service = service_over(&store);

        let req = AttachDocumentsRequest {
            document_urls: vec!["https://docs.example/kyc-7.pdf".to_string()],
        };
        let response = service.attach_documents(7, &req).await.unwrap();

        assert_eq!(response.data.status, SellerStatus::Pending);
        assert_eq!(response.data.document_urls.len(), 1);
    }

    #[tokio::test]
    async fn verification_promotes_user_to_seller() {
        let store = Arc::new(MockSellerStore::default());
        store.seed(7, SellerStatus::Pending);
        let service = service_over(&store);

        let req = UpdateSellerStatusRequest {
            status: SellerStatus::Verified,
        };
        let response = service.update_status(7, &req).await.unwrap();

        assert_eq!(response.data.status, SellerStatus::Verified);
        assert_eq!(*store.promoted.lock().unwrap(), vec![7]);
    }

    #[tokio::test]
    async fn rejection_does_not_promote_user() {
        let store = Arc::new(MockSellerStore::default());
        store.seed(7, SellerStatus::Pending);
        let service = service_over(&store);

        let req = UpdateSellerStatusRequest {
            status: SellerStatus::Rejected,
        };
        service.update_status(7, &req).await.unwrap();

        assert!(store.promoted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn review_requires_pending_status() {
        let store = Arc::new(MockSellerStore::default());
        store.seed(7, SellerStatus::Registered);
        let service = service_over(&store);

        let req = UpdateSellerStatusRequest {
            status: SellerStatus::Verified,
        };
        let err = service.update_status(7, &req).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(store.promoted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let store = Arc::new(MockSellerStore::default());
        store.seed(7, SellerStatus::Registered);
        let service = service_over(&store);

        let req = RegisterSellerRequest {
            shop_name: "Hill Farm".to_string(),
            category: "Food".to_string(),
            address: "12 Hill Road".to_string(),
        };
        assert!(service.register(7, &req).await.is_err());
    }

    #[tokio::test]
    async fn rejected_profile_can_resubmit_documents() {
        let store = Arc::new(MockSellerStore::default());
        store.seed(7, SellerStatus::Rejected);
        let service = service_over(&store);

        let req = AttachDocumentsRequest {
            document_urls: vec!["https://docs.example/kyc-7-v2.pdf".to_string()],
        };
        let response = service.attach_documents(7, &req).await.unwrap();

        assert_eq!(response.data.status, SellerStatus::Pending);
    }
}
