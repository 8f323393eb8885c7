use crate::model::{Order, OrderItemDetail, OrderStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderItemResponse {
    pub product_id: i32,
    /// Name and price are snapshots taken at placement time.
    pub name: String,
    pub price: i64,
    pub quantity: i32,
}

impl From<OrderItemDetail> for OrderItemResponse {
    fn from(value: OrderItemDetail) -> Self {
        OrderItemResponse {
            product_id: value.product_id,
            name: value.name,
            price: value.price,
            quantity: value.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    pub user_id: i32,
    pub items: Vec<OrderItemResponse>,
    pub total: i64,
    pub address: String,
    pub payment_method: String,
    pub status: OrderStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl OrderResponse {
    pub fn from_parts(order: Order, items: Vec<OrderItemDetail>) -> Self {
        OrderResponse {
            id: order.order_id,
            user_id: order.user_id,
            items: items.into_iter().map(OrderItemResponse::from).collect(),
            total: order.total,
            address: order.address,
            payment_method: order.payment_method,
            status: order.status,
            created_at: order.created_at.map(|dt| dt.to_string()),
            updated_at: order.updated_at.map(|dt| dt.to_string()),
        }
    }
}
