use crate::model::{Product, ProductStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub seller_id: i32,
    pub name: String,
    pub category: String,
    pub price: i64,
    pub quantity: i32,
    pub status: ProductStatus,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.product_id,
            seller_id: value.seller_id,
            name: value.name,
            category: value.category,
            price: value.price,
            quantity: value.quantity,
            status: value.status,
            image_url: value.image_url,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
