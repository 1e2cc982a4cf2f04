//! Platform administration endpoints
//!
//! Served under the admin prefix, which the tenant context middleware never
//! scopes to a tenant. Authentication is handled in front of this service.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct AdminStatusResponse {
    pub status: &'static str,
    pub root_domains: Vec<String>,
    pub tenants: usize,
}

/// GET /admin/status
pub async fn status(State(state): State<AppState>) -> Json<AdminStatusResponse> {
    Json(AdminStatusResponse {
        status: "ok",
        root_domains: state.classifier.root_domains().map(str::to_string).collect(),
        tenants: state.directory.len(),
    })
}
