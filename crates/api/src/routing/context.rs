//! Tenant context propagation
//!
//! Turns a [`Classification`] into forwarded request headers that downstream
//! handlers read instead of re-parsing the Host header.

use std::borrow::Cow;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tenantgate_shared::{Classification, TENANT_CANDIDATE_HEADER, TENANT_CUSTOM_DOMAIN_HEADER};

use super::HostClassifier;

/// Header assignments for a classification.
///
/// Empty unless the classification carries a tenant candidate. When the
/// candidate cannot be encoded as a header value, both assignments are dropped
/// so downstream never sees the flag without its candidate.
pub fn propagate(classification: &Classification) -> Vec<(HeaderName, HeaderValue)> {
    let Some(candidate) = classification.tenant_candidate() else {
        return Vec::new();
    };

    let candidate = match HeaderValue::from_str(candidate) {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(
                kind = classification.kind(),
                "Tenant candidate is not a valid header value, dropping tenant context"
            );
            return Vec::new();
        }
    };

    let custom_domain = if classification.is_custom_domain() {
        HeaderValue::from_static("true")
    } else {
        HeaderValue::from_static("false")
    };

    vec![
        (HeaderName::from_static(TENANT_CANDIDATE_HEADER), candidate),
        (
            HeaderName::from_static(TENANT_CUSTOM_DOMAIN_HEADER),
            custom_domain,
        ),
    ]
}

/// Host the client addressed.
///
/// The Host header wins; HTTP/2 requests often carry only the URI authority.
/// Non-UTF-8 bytes are replaced rather than discarding the whole host.
fn request_host(request: &Request<Body>) -> Cow<'_, str> {
    match request.headers().get(header::HOST) {
        Some(value) => String::from_utf8_lossy(value.as_bytes()),
        None => Cow::Borrowed(
            request
                .uri()
                .authority()
                .map(|authority| authority.as_str())
                .unwrap_or_default(),
        ),
    }
}

/// Middleware that classifies the request and forwards the tenant context.
///
/// Client-supplied copies of the forwarded headers are always removed first,
/// including on administrative paths.
pub async fn tenant_context_middleware(
    State(classifier): State<Arc<HostClassifier>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let host = request_host(&request);
    let classification = classifier.classify(&host, request.uri().path());

    tracing::debug!(
        host = %host,
        path = %request.uri().path(),
        kind = classification.kind(),
        tenant_candidate = ?classification.tenant_candidate(),
        "Classified request"
    );

    let headers = request.headers_mut();
    headers.remove(TENANT_CANDIDATE_HEADER);
    headers.remove(TENANT_CUSTOM_DOMAIN_HEADER);
    for (name, value) in propagate(&classification) {
        headers.insert(name, value);
    }

    request.extensions_mut().insert(classification);

    next.run(request).await
}
