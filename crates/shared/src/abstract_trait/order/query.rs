use crate::{
    domain::responses::{ApiResponse, MonthlyStat, OrderResponse, StatsResponse, StatsTotals},
    errors::{RepositoryError, ServiceError},
    model::{Order as OrderModel, OrderItemDetail},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<OrderModel>, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<OrderModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError>;
    async fn items_for_orders(
        &self,
        order_ids: &[i32],
    ) -> Result<Vec<OrderItemDetail>, RepositoryError>;
    async fn stats_totals(&self) -> Result<StatsTotals, RepositoryError>;
    async fn monthly_stats(&self, months: i32) -> Result<Vec<MonthlyStat>, RepositoryError>;
}

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_my_orders(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    /// Orders containing at least one line item sold by `seller_id`.
    async fn find_seller_orders(
        &self,
        seller_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn find_all_orders(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn stats(&self) -> Result<ApiResponse<StatsResponse>, ServiceError>;
}
