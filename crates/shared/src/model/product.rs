use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Moderation / availability state of a listing. `OutOfStock` is flipped by
/// the inventory ledger itself when a decrement drives quantity to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Pending,
    Active,
    OutOfStock,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub seller_id: i32,
    pub name: String,
    pub category: String,
    /// Price in currency minor units.
    pub price: i64,
    /// Authoritative stock count, never negative.
    pub quantity: i32,
    pub status: ProductStatus,
    pub image_url: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
