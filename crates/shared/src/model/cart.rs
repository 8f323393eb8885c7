use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One cart line joined with the live product record. `price` is the price
/// captured when the item was added; `live_price` and `stock` come from the
/// inventory ledger at read time and are always re-checked at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItemWithProduct {
    pub product_id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: i64,
    pub live_price: i64,
    pub stock: i32,
    pub image_url: Option<String>,
}
