use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct TranslateResponse {
    pub text: String,
    /// False when the upstream call failed or timed out and the original
    /// text was returned unchanged.
    pub translated: bool,
}
