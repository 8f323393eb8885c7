use crate::model::ProductStatus;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllProducts {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,

    #[serde(default)]
    pub category: Option<String>,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Product name is required"))]
    #[schema(example = "Wild forest honey")]
    pub name: String,

    #[validate(length(min = 1, message = "Category is required"))]
    #[schema(example = "Food")]
    pub category: String,

    #[validate(range(min = 1, message = "Price must be positive"))]
    #[schema(example = 2500)]
    pub price: i64,

    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    #[schema(example = 20)]
    pub quantity: i32,

    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(skip)]
    pub id: Option<i32>,

    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(range(min = 1, message = "Price must be positive"))]
    pub price: i64,

    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: i32,

    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ModerateProductRequest {
    pub status: ProductStatus,
}
