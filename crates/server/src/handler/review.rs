use crate::{
    middleware::{SimpleValidatedJson, auth_middleware},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::DynReviewService,
    domain::{
        requests::CreateReviewRequest,
        responses::{ApiResponse, ReviewResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = "Review",
    security(("bearer_auth" = [])),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review saved, a repeat submission overwrites", body = ApiResponse<ReviewResponse>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn create_review(
    Extension(service): Extension<DynReviewService>,
    Extension(user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateReviewRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_review(user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/reviews/product/{id}",
    tag = "Review",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Reviews for the product, newest first", body = ApiResponse<Vec<ReviewResponse>>)
    )
)]
pub async fn get_product_reviews(
    Extension(service): Extension<DynReviewService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_product(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn review_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/reviews/product/{id}", get(get_product_reviews))
        .layer(Extension(app_state.di_container.review_service.clone()));

    let private_routes = OpenApiRouter::new()
        .route("/api/reviews", post(create_review))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.review_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(private_routes)
}
