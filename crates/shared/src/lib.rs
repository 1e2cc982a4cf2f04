//! Tenantgate Shared Types and Utilities
//!
//! This crate contains types and errors shared between the router and the
//! handlers that consume its forwarded tenant context.

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
