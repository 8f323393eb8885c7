use crate::model::ReviewWithAuthor;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ReviewResponse {
    pub id: i32,
    pub product_id: i32,
    pub author: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Option<String>,
}

impl From<ReviewWithAuthor> for ReviewResponse {
    fn from(value: ReviewWithAuthor) -> Self {
        ReviewResponse {
            id: value.review_id,
            product_id: value.product_id,
            author: value.author,
            rating: value.rating,
            comment: value.comment,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
