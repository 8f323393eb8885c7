use crate::{
    domain::{
        requests::{CreateOrderRequest, OrderLine, UpdateOrderStatusRequest},
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order as OrderModel, OrderStatus},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Persist the order, decrement stock per line with a conditional atomic
    /// update, and clear the buyer's cart, all in one transaction. A line
    /// whose conditional decrement matches no row (a concurrent checkout won
    /// the race) aborts with `RepositoryError::Conflict` naming the product;
    /// the rollback undoes the order insert and every earlier decrement.
    async fn place_order(
        &self,
        user_id: i32,
        lines: &[OrderLine],
        address: &str,
        payment_method: &str,
        total: i64,
    ) -> Result<OrderModel, RepositoryError>;
    async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> Result<OrderModel, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn place_order(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update_status(
        &self,
        caller_id: i32,
        order_id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
