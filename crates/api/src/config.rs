//! Application configuration

use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,
    pub max_request_body_bytes: usize,

    // Tenant routing
    /// Ordered platform root domains, e.g. "example.com,staging.example.com,localhost:3000"
    pub root_domains: Vec<String>,
    pub admin_path_prefix: String,
    pub internal_path_prefix: String,

    // Tenant directory
    pub tenants_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            max_request_body_bytes: 1_048_576,
            root_domains: vec!["localhost:3000".to_string()],
            admin_path_prefix: "/admin".to_string(),
            internal_path_prefix: "/_internal".to_string(),
            tenants_file: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            // Server
            bind_address: env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            max_request_body_bytes: env::var("MAX_REQUEST_BODY_BYTES")
                .unwrap_or_else(|_| "1048576".to_string()) // 1MB default
                .parse()
                .unwrap_or(defaults.max_request_body_bytes),

            // Tenant routing
            root_domains: match env::var("ROOT_DOMAINS") {
                Ok(list) => list.split(',').map(|d| d.trim().to_string()).collect(),
                Err(_) => defaults.root_domains,
            },
            admin_path_prefix: env::var("ADMIN_PATH_PREFIX")
                .unwrap_or(defaults.admin_path_prefix),
            internal_path_prefix: env::var("INTERNAL_PATH_PREFIX")
                .unwrap_or(defaults.internal_path_prefix),

            // Tenant directory
            tenants_file: env::var("TENANTS_FILE")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        };

        config.validate()?;
        Ok(config)
    }

    /// Semantic checks that env parsing alone can't express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_domains.is_empty() {
            return Err(ConfigError::Missing("ROOT_DOMAINS"));
        }

        for domain in &self.root_domains {
            // An empty root would turn every host into a platform subdomain
            if domain.is_empty()
                || domain.starts_with('.')
                || domain.ends_with('.')
                || domain.chars().any(char::is_whitespace)
            {
                return Err(ConfigError::InvalidRootDomain(domain.clone()));
            }
        }

        for (var, prefix) in [
            ("ADMIN_PATH_PREFIX", &self.admin_path_prefix),
            ("INTERNAL_PATH_PREFIX", &self.internal_path_prefix),
        ] {
            if !prefix.starts_with('/') || prefix.len() < 2 {
                return Err(ConfigError::InvalidPathPrefix(var, prefix.clone()));
            }
        }

        Ok(())
    }

    /// Path prefixes that bypass tenant classification
    pub fn bypass_prefixes(&self) -> [&str; 2] {
        [
            self.admin_path_prefix.as_str(),
            self.internal_path_prefix.as_str(),
        ]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid root domain: {0:?}")]
    InvalidRootDomain(String),
    #[error("Invalid path prefix in {0}: {1:?}")]
    InvalidPathPrefix(&'static str, String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "BIND_ADDRESS",
        "MAX_REQUEST_BODY_BYTES",
        "ROOT_DOMAINS",
        "ADMIN_PATH_PREFIX",
        "INTERNAL_PATH_PREFIX",
        "TENANTS_FILE",
    ];

    /// Helper to clear env vars before and after tests
    fn cleanup_config() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        cleanup_config();

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert_eq!(config.root_domains, vec!["localhost:3000"]);
        assert_eq!(config.bypass_prefixes(), ["/admin", "/_internal"]);
        assert_eq!(config.max_request_body_bytes, 1_048_576);
        assert!(config.tenants_file.is_none());
    }

    #[test]
    #[serial]
    fn test_root_domains_keep_order_and_trim() {
        cleanup_config();
        env::set_var(
            "ROOT_DOMAINS",
            "example.com, staging.example.com ,localhost:3000",
        );
        env::set_var("TENANTS_FILE", "/etc/tenantgate/tenants.json");

        let config = Config::from_env().unwrap();
        assert_eq!(
            config.root_domains,
            vec!["example.com", "staging.example.com", "localhost:3000"]
        );
        assert_eq!(
            config.tenants_file,
            Some(PathBuf::from("/etc/tenantgate/tenants.json"))
        );

        cleanup_config();
    }

    #[test]
    #[serial]
    fn test_empty_root_domain_rejected() {
        cleanup_config();

        // Trailing comma yields an empty entry
        env::set_var("ROOT_DOMAINS", "example.com,");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidRootDomain(_))
        ));

        env::set_var("ROOT_DOMAINS", ".example.com");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidRootDomain(_))
        ));

        cleanup_config();
    }

    #[test]
    #[serial]
    fn test_invalid_prefix_rejected() {
        cleanup_config();

        env::set_var("ADMIN_PATH_PREFIX", "admin");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidPathPrefix("ADMIN_PATH_PREFIX", _))
        ));

        env::set_var("ADMIN_PATH_PREFIX", "/admin");
        env::set_var("INTERNAL_PATH_PREFIX", "/");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidPathPrefix("INTERNAL_PATH_PREFIX", _))
        ));

        cleanup_config();
    }

    #[test]
    #[serial]
    fn test_unparseable_body_limit_falls_back() {
        cleanup_config();
        env::set_var("MAX_REQUEST_BODY_BYTES", "lots");

        let config = Config::from_env().unwrap();
        assert_eq!(config.max_request_body_bytes, 1_048_576);

        cleanup_config();
    }
}
