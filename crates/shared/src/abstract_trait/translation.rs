use crate::{
    domain::{requests::TranslateRequest, responses::{ApiResponse, TranslateResponse}},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTranslationService = Arc<dyn TranslationServiceTrait + Send + Sync>;

#[async_trait]
pub trait TranslationServiceTrait {
    async fn translate(
        &self,
        req: &TranslateRequest,
    ) -> Result<ApiResponse<TranslateResponse>, ServiceError>;
}
