use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use shared::{abstract_trait::DynAuthService, errors::ErrorResponse};

/// Runs after `auth_middleware`, so the extension always carries a verified
/// user id.
pub async fn admin_middleware(
    Extension(auth): Extension<DynAuthService>,
    Extension(user_id): Extension<i32>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let me = auth.me(user_id).await.map_err(|_| {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                status: "fail".to_string(),
                message: "Unknown user".to_string(),
            }),
        )
    })?;

    if !me.data.is_admin {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                status: "fail".to_string(),
                message: "Admin access required".to_string(),
            }),
        ));
    }

    Ok(next.run(req).await)
}
