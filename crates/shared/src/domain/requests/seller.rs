use crate::model::SellerStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterSellerRequest {
    #[validate(length(min = 2, message = "Shop name must be at least 2 characters"))]
    pub shop_name: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
}

/// KYC document references. Upload plumbing lives elsewhere; the profile
/// only stores where the documents ended up.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AttachDocumentsRequest {
    #[validate(length(min = 1, message = "At least one document is required"))]
    pub document_urls: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSellerStatusRequest {
    pub status: SellerStatus,
}
