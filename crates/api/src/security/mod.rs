//! Response hardening applied to every route.

mod headers;

pub use headers::{security_headers, security_headers_middleware};
