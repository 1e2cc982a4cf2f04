//! Shared application state

use std::sync::Arc;

use tenantgate_shared::TenantgateError;

use crate::config::Config;
use crate::routing::{HostClassifier, TenantDirectory};

/// State injected into handlers and middleware. Everything here is immutable
/// after startup, so requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub classifier: Arc<HostClassifier>,
    pub directory: Arc<TenantDirectory>,
}

impl AppState {
    /// Build state from configuration, loading the tenant directory if configured
    pub fn from_config(config: Config) -> Result<Self, TenantgateError> {
        let directory = match &config.tenants_file {
            Some(path) => {
                let directory = TenantDirectory::load(path)?;
                tracing::info!(
                    path = %path.display(),
                    tenants = directory.len(),
                    "Tenant directory loaded"
                );
                directory
            }
            None => {
                tracing::warn!("TENANTS_FILE not set, tenant directory is empty");
                TenantDirectory::default()
            }
        };

        Self::new(config, directory)
    }

    /// Build state with an explicit directory
    pub fn new(config: Config, directory: TenantDirectory) -> Result<Self, TenantgateError> {
        let classifier = HostClassifier::new(
            config.root_domains.iter().cloned(),
            config.bypass_prefixes(),
        )?;

        Ok(Self {
            config: Arc::new(config),
            classifier: Arc::new(classifier),
            directory: Arc::new(directory),
        })
    }
}
