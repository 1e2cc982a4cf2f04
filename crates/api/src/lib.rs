//! Tenantgate API Library
//!
//! This crate contains the multi-tenant request router: host classification,
//! tenant context propagation, security headers and the HTTP routes that
//! consume them.

pub mod config;
pub mod error;
pub mod routes;
pub mod routing;
pub mod security;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use routing::{HostClassifier, RequestTenant, TenantDirectory};
pub use state::AppState;
