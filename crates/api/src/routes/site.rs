//! Current-site endpoint
//!
//! Resolves the forwarded tenant candidate to a tenant record. Requests with
//! no candidate get the platform default site.

use axum::{extract::State, Json};
use serde::Serialize;
use tenantgate_shared::{Tenant, TenantId};

use crate::{
    error::{ApiError, ApiResult},
    routing::RequestTenant,
    state::AppState,
};

#[derive(Debug, Serialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum SiteResponse {
    Platform,
    Tenant(SiteTenant),
}

#[derive(Debug, Serialize)]
pub struct SiteTenant {
    pub id: TenantId,
    pub slug: String,
    pub name: String,
    pub theme: String,
    pub custom_domain: Option<String>,
}

impl From<&Tenant> for SiteTenant {
    fn from(tenant: &Tenant) -> Self {
        Self {
            id: tenant.id,
            slug: tenant.slug.clone(),
            name: tenant.name.clone(),
            theme: tenant.theme.clone(),
            custom_domain: tenant.custom_domain.clone(),
        }
    }
}

/// GET /api/v1/site
pub async fn current_site(
    State(state): State<AppState>,
    tenant: RequestTenant,
) -> ApiResult<Json<SiteResponse>> {
    let resolved = match &tenant {
        RequestTenant::Platform => return Ok(Json(SiteResponse::Platform)),
        RequestTenant::Slug(slug) => state.directory.find_by_slug(slug),
        RequestTenant::CustomDomain(domain) => state.directory.find_by_custom_domain(domain),
    };

    match resolved {
        Some(record) => Ok(Json(SiteResponse::Tenant(record.into()))),
        None => {
            let candidate = tenant.candidate().unwrap_or_default().to_string();
            tracing::debug!(candidate = %candidate, "Tenant candidate did not resolve");
            Err(ApiError::TenantNotFound(candidate))
        }
    }
}
