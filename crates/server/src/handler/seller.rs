use crate::{
    middleware::{SimpleValidatedJson, admin_middleware, auth_middleware},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use shared::{
    abstract_trait::DynSellerService,
    domain::{
        requests::{AttachDocumentsRequest, RegisterSellerRequest, UpdateSellerStatusRequest},
        responses::{ApiResponse, SellerProfileResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/sellers/register",
    tag = "Seller",
    security(("bearer_auth" = [])),
    request_body = RegisterSellerRequest,
    responses(
        (status = 201, description = "Seller profile created in registered state", body = ApiResponse<SellerProfileResponse>),
        (status = 409, description = "Profile already exists")
    )
)]
pub async fn register_seller(
    Extension(service): Extension<DynSellerService>,
    Extension(user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<RegisterSellerRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.register(user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/sellers/documents",
    tag = "Seller",
    security(("bearer_auth" = [])),
    request_body = AttachDocumentsRequest,
    responses(
        (status = 200, description = "Documents attached, profile moved to pending review", body = ApiResponse<SellerProfileResponse>),
        (status = 404, description = "No seller profile for this user")
    )
)]
pub async fn attach_documents(
    Extension(service): Extension<DynSellerService>,
    Extension(user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<AttachDocumentsRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.attach_documents(user_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/sellers/me",
    tag = "Seller",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's seller profile", body = ApiResponse<SellerProfileResponse>),
        (status = 404, description = "No seller profile for this user")
    )
)]
pub async fn my_seller_profile(
    Extension(service): Extension<DynSellerService>,
    Extension(user_id): Extension<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.my_profile(user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/sellers/pending",
    tag = "Seller",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profiles awaiting review", body = ApiResponse<Vec<SellerProfileResponse>>),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn pending_sellers(
    Extension(service): Extension<DynSellerService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.pending_profiles().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/sellers/{user_id}/status",
    tag = "Seller",
    security(("bearer_auth" = [])),
    params(("user_id" = i32, Path, description = "User id of the profile under review")),
    request_body = UpdateSellerStatusRequest,
    responses(
        (status = 200, description = "Review decision applied, verification promotes the user", body = ApiResponse<SellerProfileResponse>),
        (status = 400, description = "Profile is not pending review"),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn update_seller_status(
    Extension(service): Extension<DynSellerService>,
    Path(user_id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateSellerStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_status(user_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn seller_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let user_routes = OpenApiRouter::new()
        .route("/api/sellers/register", post(register_seller))
        .route("/api/sellers/documents", post(attach_documents))
        .route("/api/sellers/me", get(my_seller_profile))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.seller_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    let admin_routes = OpenApiRouter::new()
        .route("/api/sellers/pending", get(pending_sellers))
        .route("/api/sellers/{user_id}/status", put(update_seller_status))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.seller_service.clone()))
        .layer(Extension(app_state.di_container.auth_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    user_routes.merge(admin_routes)
}
