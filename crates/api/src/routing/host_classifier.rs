//! Host-to-Tenant Classification
//!
//! Decides, from the Host header and path alone, whether a request is:
//! - Administrative: under the admin or internal-framework prefix (host ignored)
//! - Platform root: the host is one of the platform's own domains
//! - Subdomain tenant: acme.example.test -> candidate "acme"
//! - Custom domain tenant: www.acme-electric.de -> candidate is the whole host
//!
//! Classification never performs I/O. The candidate it yields is unverified;
//! the tenant directory decides whether it names a real tenant.

use tenantgate_shared::{Classification, TenantgateError};

/// A platform root domain with its precomputed subdomain suffix
#[derive(Debug, Clone)]
struct RootDomain {
    name: String,
    /// `"." + name`
    suffix: String,
}

/// Immutable host classifier shared across all requests
#[derive(Debug, Clone)]
pub struct HostClassifier {
    /// Ordered as configured (production apex, staging, local dev)
    root_domains: Vec<RootDomain>,
    /// Path prefixes that bypass tenant classification
    bypass_prefixes: Vec<String>,
}

impl HostClassifier {
    /// Create a classifier for the given root domains and bypass prefixes.
    ///
    /// Root domains must be non-empty: an empty root would make every host
    /// match its suffix check. Bypass prefixes must be non-empty so that they
    /// cannot swallow every path.
    pub fn new<D, P>(root_domains: D, bypass_prefixes: P) -> Result<Self, TenantgateError>
    where
        D: IntoIterator,
        D::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let root_domains = root_domains
            .into_iter()
            .map(|name| {
                let name: String = name.into();
                if name.is_empty() {
                    return Err(TenantgateError::Validation(
                        "root domain must not be empty".to_string(),
                    ));
                }
                let suffix = format!(".{}", name);
                Ok(RootDomain { name, suffix })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if root_domains.is_empty() {
            return Err(TenantgateError::Validation(
                "at least one root domain is required".to_string(),
            ));
        }

        let bypass_prefixes: Vec<String> = bypass_prefixes.into_iter().map(|p| p.into()).collect();
        if bypass_prefixes.iter().any(|p| p.is_empty()) {
            return Err(TenantgateError::Validation(
                "bypass path prefix must not be empty".to_string(),
            ));
        }

        Ok(Self {
            root_domains,
            bypass_prefixes,
        })
    }

    /// Classify a request by its Host header value and path.
    ///
    /// The host is compared verbatim: no case folding and no port stripping.
    /// A missing Host header should be passed as `""`.
    pub fn classify(&self, host: &str, path: &str) -> Classification {
        if self.is_bypass_path(path) {
            return Classification::Administrative;
        }

        if host.is_empty() || self.is_root_domain(host) {
            return Classification::PlatformRoot;
        }

        if self.is_platform_subdomain(host) {
            let slug = host.split('.').next().unwrap_or(host);
            // ".example.test" carries no label to route on
            if slug.is_empty() {
                return Classification::PlatformRoot;
            }
            return Classification::Subdomain {
                slug: slug.to_string(),
            };
        }

        Classification::CustomDomain {
            domain: host.to_string(),
        }
    }

    /// Whether the path is under the admin or internal-framework namespace
    pub fn is_bypass_path(&self, path: &str) -> bool {
        self.bypass_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Configured root domains, in order
    pub fn root_domains(&self) -> impl Iterator<Item = &str> {
        self.root_domains.iter().map(|r| r.name.as_str())
    }

    fn is_root_domain(&self, host: &str) -> bool {
        self.root_domains.iter().any(|r| r.name == host)
    }

    fn is_platform_subdomain(&self, host: &str) -> bool {
        self.root_domains
            .iter()
            .any(|r| host.ends_with(r.suffix.as_str()))
    }
}
