mod auth;
mod cart;
mod order;
mod product;
mod review;
mod seller;
mod translate;

use crate::state::AppState;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::cart::cart_routes;
pub use self::order::order_routes;
pub use self::product::product_routes;
pub use self::review::review_routes;
pub use self::seller::seller_routes;
pub use self::translate::translate_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register_user_handler,
        auth::login_user_handler,
        auth::get_me_handler,

        product::get_products,
        product::get_product,
        product::get_my_products,
        product::create_product,
        product::update_product,
        product::moderate_product,
        product::delete_product,

        cart::get_cart,
        cart::upsert_cart_item,
        cart::remove_cart_item,
        cart::clear_cart,

        order::create_order,
        order::get_my_orders,
        order::get_seller_orders,
        order::get_all_orders,
        order::get_order_stats,
        order::update_order_status,

        seller::register_seller,
        seller::attach_documents,
        seller::my_seller_profile,
        seller::pending_sellers,
        seller::update_seller_status,

        review::create_review,
        review::get_product_reviews,

        translate::translate_text,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Product", description = "Product catalog and moderation endpoints"),
        (name = "Cart", description = "Shopping cart endpoints"),
        (name = "Order", description = "Checkout and order endpoints"),
        (name = "Seller", description = "Seller onboarding endpoints"),
        (name = "Review", description = "Product review endpoints"),
        (name = "Translate", description = "Text translation proxy"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(utoipa::openapi::security::Http::new(
                    utoipa::openapi::security::HttpAuthScheme::Bearer,
                )),
            );
        }
    }
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(auth_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(cart_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(seller_routes(shared_state.clone()))
            .merge(review_routes(shared_state.clone()))
            .merge(translate_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("server listening on http://{}", listener.local_addr()?);
        info!("swagger ui available at http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
