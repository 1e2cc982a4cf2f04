//! In-memory tenant directory
//!
//! Resolves verified tenant records from the candidates forwarded by the
//! tenant context middleware. Loaded once at startup and immutable afterwards.

use std::collections::HashMap;
use std::path::Path;

use tenantgate_shared::{Tenant, TenantgateError};

/// Immutable slug and custom-domain index over tenant records
#[derive(Debug, Default)]
pub struct TenantDirectory {
    tenants: Vec<Tenant>,
    by_slug: HashMap<String, usize>,
    by_domain: HashMap<String, usize>,
}

impl TenantDirectory {
    /// Build a directory, rejecting invalid slugs and duplicate slugs/domains
    pub fn from_tenants(tenants: Vec<Tenant>) -> Result<Self, TenantgateError> {
        let mut by_slug = HashMap::with_capacity(tenants.len());
        let mut by_domain = HashMap::new();

        for (idx, tenant) in tenants.iter().enumerate() {
            if tenant.slug.is_empty() || tenant.slug.contains('.') {
                return Err(TenantgateError::Validation(format!(
                    "invalid tenant slug: {:?}",
                    tenant.slug
                )));
            }
            if by_slug.insert(tenant.slug.clone(), idx).is_some() {
                return Err(TenantgateError::Duplicate {
                    field: "slug",
                    value: tenant.slug.clone(),
                });
            }

            if let Some(domain) = &tenant.custom_domain {
                if by_domain.insert(domain.clone(), idx).is_some() {
                    return Err(TenantgateError::Duplicate {
                        field: "custom_domain",
                        value: domain.clone(),
                    });
                }
            }
        }

        Ok(Self {
            tenants,
            by_slug,
            by_domain,
        })
    }

    /// Load a JSON array of tenants from disk
    pub fn load(path: &Path) -> Result<Self, TenantgateError> {
        let content = std::fs::read_to_string(path)?;
        let tenants: Vec<Tenant> = serde_json::from_str(&content)?;
        Self::from_tenants(tenants)
    }

    /// Active tenant for a platform subdomain slug
    pub fn find_by_slug(&self, slug: &str) -> Option<&Tenant> {
        self.by_slug
            .get(slug)
            .map(|&idx| &self.tenants[idx])
            .filter(|t| t.is_active())
    }

    /// Active tenant serving a custom domain
    pub fn find_by_custom_domain(&self, domain: &str) -> Option<&Tenant> {
        self.by_domain
            .get(domain)
            .map(|&idx| &self.tenants[idx])
            .filter(|t| t.is_active())
    }

    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }
}
