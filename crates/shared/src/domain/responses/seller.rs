use crate::model::{SellerProfile, SellerStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SellerProfileResponse {
    pub user_id: i32,
    pub shop_name: String,
    pub category: String,
    pub address: String,
    pub document_urls: Vec<String>,
    pub status: SellerStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<SellerProfile> for SellerProfileResponse {
    fn from(value: SellerProfile) -> Self {
        SellerProfileResponse {
            user_id: value.user_id,
            shop_name: value.shop_name,
            category: value.category,
            address: value.address,
            document_urls: value.document_urls,
            status: value.status,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
