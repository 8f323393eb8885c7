use crate::{
    middleware::SimpleValidatedJson,
    state::AppState,
};
use axum::{Extension, Json, http::StatusCode, response::IntoResponse, routing::post};
use shared::{
    abstract_trait::DynTranslationService,
    domain::{
        requests::TranslateRequest,
        responses::{ApiResponse, TranslateResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/translate",
    tag = "Translate",
    request_body = TranslateRequest,
    responses(
        (status = 200, description = "Translated text, or the original when upstream is unavailable", body = ApiResponse<TranslateResponse>)
    )
)]
pub async fn translate_text(
    Extension(service): Extension<DynTranslationService>,
    SimpleValidatedJson(body): SimpleValidatedJson<TranslateRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.translate(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn translate_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/translate", post(translate_text))
        .layer(Extension(app_state.di_container.translation_service.clone()))
}
