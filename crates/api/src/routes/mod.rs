//! API routes

pub mod admin;
pub mod health;
pub mod site;

use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
    error::ApiError,
    routing::tenant_context_middleware,
    security::security_headers_middleware,
    state::AppState,
};

/// Create all API routes
///
/// Layer order, outermost first: request tracing, security headers, body
/// limit, tenant context. Security headers therefore wrap every response,
/// including the administrative paths and the fallback.
pub fn create_router(state: AppState) -> Router {
    // Health check routes (at root level for infrastructure monitoring)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness));

    // Tenant-scoped API routes - under /api/v1
    let api_v1_routes = Router::new().route("/site", get(site::current_site));

    // Platform administration - never tenant-scoped
    let admin_routes = Router::new().route("/status", get(admin::status));

    Router::new()
        .merge(health_routes)
        .nest("/api/v1", api_v1_routes)
        .nest(&state.config.admin_path_prefix, admin_routes)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.classifier.clone(),
            tenant_context_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.config.max_request_body_bytes))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
