use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Approval state machine: registered -> pending (after KYC documents are
/// attached) -> verified or rejected. Verification flips `users.is_seller`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SellerStatus {
    Registered,
    Pending,
    Verified,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SellerProfile {
    pub profile_id: i32,
    pub user_id: i32,
    pub shop_name: String,
    pub category: String,
    pub address: String,
    pub document_urls: Vec<String>,
    pub status: SellerStatus,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
