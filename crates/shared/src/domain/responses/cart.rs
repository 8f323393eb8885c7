use crate::model::CartItemWithProduct;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartItemResponse {
    pub product_id: i32,
    pub name: String,
    pub quantity: i32,
    /// Price captured when the line was added; advisory only.
    pub price: i64,
    /// Current ledger price, re-read at every fetch.
    pub live_price: i64,
    pub stock: i32,
    pub image_url: Option<String>,
}

impl From<CartItemWithProduct> for CartItemResponse {
    fn from(value: CartItemWithProduct) -> Self {
        CartItemResponse {
            product_id: value.product_id,
            name: value.name,
            quantity: value.quantity,
            price: value.price,
            live_price: value.live_price,
            stock: value.stock,
            image_url: value.image_url,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
}
