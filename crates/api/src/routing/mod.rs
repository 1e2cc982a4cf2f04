//! Host-based tenant routing
//!
//! This module decides which tenant an incoming request belongs to, enabling
//! tenant-specific sites like:
//! - Platform subdomains: acme.example.test
//! - Custom domains: www.acme-electric.de
//!
//! The classifier and middleware only produce an unverified candidate; the
//! directory and the `RequestTenant` extractor are the downstream side that
//! turns it into a tenant record.

mod context;
mod directory;
mod extract;
mod host_classifier;

pub use context::{propagate, tenant_context_middleware};
pub use directory::TenantDirectory;
pub use extract::RequestTenant;
pub use host_classifier::HostClassifier;
