use crate::{
    domain::{
        requests::CreateReviewRequest,
        responses::{ApiResponse, ReviewResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::ReviewWithAuthor,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynReviewRepository = Arc<dyn ReviewRepositoryTrait + Send + Sync>;
pub type DynReviewService = Arc<dyn ReviewServiceTrait + Send + Sync>;

#[async_trait]
pub trait ReviewRepositoryTrait {
    /// One review per user and product; a repeat submission overwrites.
    async fn upsert_review(
        &self,
        user_id: i32,
        req: &CreateReviewRequest,
    ) -> Result<ReviewWithAuthor, RepositoryError>;
    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<ReviewWithAuthor>, RepositoryError>;
}

#[async_trait]
pub trait ReviewServiceTrait {
    async fn create_review(
        &self,
        user_id: i32,
        req: &CreateReviewRequest,
    ) -> Result<ApiResponse<ReviewResponse>, ServiceError>;
    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<ReviewResponse>>, ServiceError>;
}
