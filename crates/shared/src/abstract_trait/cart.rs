use crate::{
    domain::{
        requests::UpsertCartItemRequest,
        responses::{ApiResponse, CartResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::CartItemWithProduct,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCartRepository = Arc<dyn CartRepositoryTrait + Send + Sync>;
pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartRepositoryTrait {
    async fn get_items(&self, user_id: i32) -> Result<Vec<CartItemWithProduct>, RepositoryError>;
    async fn upsert_item(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
        price: i64,
    ) -> Result<(), RepositoryError>;
    async fn remove_item(&self, user_id: i32, product_id: i32) -> Result<(), RepositoryError>;
    async fn clear(&self, user_id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait CartServiceTrait {
    async fn get_cart(&self, user_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn upsert_item(
        &self,
        user_id: i32,
        req: &UpsertCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn remove_item(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn clear(&self, user_id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
