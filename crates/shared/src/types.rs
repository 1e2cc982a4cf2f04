//! Common types used across Tenantgate

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Forwarded Attributes
// =============================================================================

/// Request header carrying the unverified tenant candidate (slug or raw host)
pub const TENANT_CANDIDATE_HEADER: &str = "x-tenant-candidate";

/// Request header carrying `"true"` when the candidate is a custom domain
pub const TENANT_CUSTOM_DOMAIN_HEADER: &str = "x-tenant-custom-domain";

// =============================================================================
// ID Wrappers
// =============================================================================

/// Tenant ID wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(pub Uuid);

impl TenantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TenantId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TenantId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

// =============================================================================
// Host Classification
// =============================================================================

/// Outcome of classifying a request by its host and path.
///
/// Only `Subdomain` and `CustomDomain` carry a tenant candidate. The candidate
/// is a routing hint parsed from an untrusted header and must be verified
/// against the tenant directory before it is used to scope data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    /// Path is under the admin or internal-framework namespace. The host was
    /// not inspected.
    Administrative,
    /// Host is a platform root domain, or no usable host was supplied.
    PlatformRoot,
    /// Host is `<slug>.<root domain>`.
    Subdomain { slug: String },
    /// Host is not under any platform root domain.
    CustomDomain { domain: String },
}

impl Classification {
    /// The tenant candidate, if this request is tenant-scoped
    pub fn tenant_candidate(&self) -> Option<&str> {
        match self {
            Classification::Subdomain { slug } => Some(slug),
            Classification::CustomDomain { domain } => Some(domain),
            Classification::Administrative | Classification::PlatformRoot => None,
        }
    }

    pub fn is_custom_domain(&self) -> bool {
        matches!(self, Classification::CustomDomain { .. })
    }

    pub fn is_administrative(&self) -> bool {
        matches!(self, Classification::Administrative)
    }

    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Classification::Administrative => "administrative",
            Classification::PlatformRoot => "platform_root",
            Classification::Subdomain { .. } => "subdomain",
            Classification::CustomDomain { .. } => "custom_domain",
        }
    }
}

// =============================================================================
// Tenant Records
// =============================================================================

/// Tenant lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TenantStatus {
    #[default]
    Active,
    Suspended,
}

/// A tenant site as stored in the tenant directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    /// Platform subdomain label, e.g. `acme` for `acme.<root domain>`
    pub slug: String,
    /// Fully custom domain served for this tenant, if any
    #[serde(default)]
    pub custom_domain: Option<String>,
    pub name: String,
    /// Theme identifier consumed by the renderer
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub status: TenantStatus,
}

fn default_theme() -> String {
    "default".to_string()
}

impl Tenant {
    pub fn is_active(&self) -> bool {
        self.status == TenantStatus::Active
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_accessors() {
        let admin = Classification::Administrative;
        assert!(admin.is_administrative());
        assert_eq!(admin.tenant_candidate(), None);
        assert!(!admin.is_custom_domain());

        let root = Classification::PlatformRoot;
        assert!(!root.is_administrative());
        assert_eq!(root.tenant_candidate(), None);
        assert!(!root.is_custom_domain());

        let sub = Classification::Subdomain {
            slug: "acme".to_string(),
        };
        assert_eq!(sub.tenant_candidate(), Some("acme"));
        assert!(!sub.is_custom_domain());

        let custom = Classification::CustomDomain {
            domain: "www.acme-electric.de".to_string(),
        };
        assert_eq!(custom.tenant_candidate(), Some("www.acme-electric.de"));
        assert!(custom.is_custom_domain());
    }

    #[test]
    fn test_classification_serializes_with_kind_tag() {
        let json = serde_json::to_value(Classification::Subdomain {
            slug: "acme".to_string(),
        })
        .unwrap();
        assert_eq!(json["kind"], "subdomain");
        assert_eq!(json["slug"], "acme");
    }

    #[test]
    fn test_tenant_defaults_on_deserialize() {
        let tenant: Tenant = serde_json::from_str(
            r#"{"id":"6f1c1a4e-0000-4000-8000-000000000001","slug":"acme","name":"Acme"}"#,
        )
        .unwrap();
        assert_eq!(tenant.theme, "default");
        assert_eq!(tenant.status, TenantStatus::Active);
        assert!(tenant.custom_domain.is_none());
        assert!(tenant.is_active());
    }
}
