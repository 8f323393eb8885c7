use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Add-or-update for a cart line. A repeated add for the same product sets
/// the absolute quantity, it does not accumulate.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertCartItemRequest {
    #[validate(range(min = 1, message = "Product ID is required"))]
    #[schema(example = 1)]
    pub product_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 2)]
    pub quantity: i32,
}
