//! Error types for Tenantgate

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TenantgateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate tenant {field}: {value}")]
    Duplicate { field: &'static str, value: String },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
