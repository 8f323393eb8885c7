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
    routing::{delete, get, post},
};
use shared::{
    abstract_trait::DynCartService,
    domain::{
        requests::UpsertCartItemRequest,
        responses::{ApiResponse, CartResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/carts",
    tag = "Cart",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current cart, empty if never used", body = ApiResponse<CartResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_cart(
    Extension(service): Extension<DynCartService>,
    Extension(user_id): Extension<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_cart(user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/carts/item",
    tag = "Cart",
    security(("bearer_auth" = [])),
    request_body = UpsertCartItemRequest,
    responses(
        (status = 200, description = "Cart line set to the requested quantity", body = ApiResponse<CartResponse>),
        (status = 400, description = "Product is sold out"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn upsert_cart_item(
    Extension(service): Extension<DynCartService>,
    Extension(user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpsertCartItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.upsert_item(user_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/carts/item/{product_id}",
    tag = "Cart",
    security(("bearer_auth" = [])),
    params(("product_id" = i32, Path, description = "Product id of the line to remove")),
    responses(
        (status = 200, description = "Line removed, absent lines are a no-op", body = ApiResponse<CartResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn remove_cart_item(
    Extension(service): Extension<DynCartService>,
    Extension(user_id): Extension<i32>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.remove_item(user_id, product_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/carts",
    tag = "Cart",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Cart emptied"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn clear_cart(
    Extension(service): Extension<DynCartService>,
    Extension(user_id): Extension<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.clear(user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn cart_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/carts", get(get_cart))
        .route("/api/carts", delete(clear_cart))
        .route("/api/carts/item", post(upsert_cart_item))
        .route("/api/carts/item/{product_id}", delete(remove_cart_item))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.cart_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
