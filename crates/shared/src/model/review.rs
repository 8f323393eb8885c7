use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReviewWithAuthor {
    pub review_id: i32,
    pub product_id: i32,
    pub user_id: i32,
    pub author: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}
