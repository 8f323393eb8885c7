use crate::model::OrderStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// One requested line item. Older clients send the quantity under `qty`;
/// both spellings land here and an omitted quantity defaults to 1.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderItemRequest {
    #[validate(range(min = 1, message = "Product ID is required"))]
    #[schema(example = 1)]
    pub product_id: i32,

    #[serde(alias = "qty", default = "default_quantity")]
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 3)]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(nested)]
    pub items: Vec<OrderItemRequest>,

    #[validate(length(min = 1, message = "Delivery address is required"))]
    pub address: String,

    #[validate(length(min = 1, message = "Payment method is required"))]
    pub payment_method: String,

    /// Tolerated for older clients but never trusted; the persisted total is
    /// always computed server-side from ledger prices.
    #[serde(default)]
    pub total: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

/// A validated, server-priced line item handed to the order repository. Name
/// and price are snapshots read from the inventory ledger, not client input.
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub product_id: i32,
    pub name: String,
    pub price: i64,
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_accepts_qty_alias() {
        let item: OrderItemRequest = serde_json::from_str(r#"{"product_id": 7, "qty": 4}"#)
            .expect("alias should deserialize");
        assert_eq!(item.quantity, 4);
    }

    #[test]
    fn quantity_defaults_to_one() {
        let item: OrderItemRequest =
            serde_json::from_str(r#"{"product_id": 7}"#).expect("default should apply");
        assert_eq!(item.quantity, 1);
    }
}
