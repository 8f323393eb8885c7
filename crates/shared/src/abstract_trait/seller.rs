use crate::{
    domain::{
        requests::{AttachDocumentsRequest, RegisterSellerRequest, UpdateSellerStatusRequest},
        responses::{ApiResponse, SellerProfileResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{SellerProfile, SellerStatus},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSellerRepository = Arc<dyn SellerRepositoryTrait + Send + Sync>;
pub type DynSellerService = Arc<dyn SellerServiceTrait + Send + Sync>;

#[async_trait]
pub trait SellerRepositoryTrait {
    async fn create_profile(
        &self,
        user_id: i32,
        req: &RegisterSellerRequest,
    ) -> Result<SellerProfile, RepositoryError>;
    async fn find_by_user(&self, user_id: i32) -> Result<Option<SellerProfile>, RepositoryError>;
    async fn attach_documents(
        &self,
        user_id: i32,
        urls: &[String],
    ) -> Result<SellerProfile, RepositoryError>;
    async fn set_status(
        &self,
        user_id: i32,
        status: SellerStatus,
    ) -> Result<SellerProfile, RepositoryError>;
    async fn find_by_status(
        &self,
        status: SellerStatus,
    ) -> Result<Vec<SellerProfile>, RepositoryError>;
}

#[async_trait]
pub trait SellerServiceTrait {
    async fn register(
        &self,
        user_id: i32,
        req: &RegisterSellerRequest,
    ) -> Result<ApiResponse<SellerProfileResponse>, ServiceError>;
    async fn attach_documents(
        &self,
        user_id: i32,
        req: &AttachDocumentsRequest,
    ) -> Result<ApiResponse<SellerProfileResponse>, ServiceError>;
    async fn my_profile(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<SellerProfileResponse>, ServiceError>;
    async fn pending_profiles(
        &self,
    ) -> Result<ApiResponse<Vec<SellerProfileResponse>>, ServiceError>;
    async fn update_status(
        &self,
        user_id: i32,
        req: &UpdateSellerStatusRequest,
    ) -> Result<ApiResponse<SellerProfileResponse>, ServiceError>;
}
