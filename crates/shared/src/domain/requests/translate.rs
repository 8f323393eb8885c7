use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TranslateRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,

    #[validate(length(min = 2, max = 8, message = "Invalid language code"))]
    #[schema(example = "ml")]
    pub target_lang: String,
}
