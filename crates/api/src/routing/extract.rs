//! Extractor for handlers that consume the forwarded tenant context

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tenantgate_shared::{TENANT_CANDIDATE_HEADER, TENANT_CUSTOM_DOMAIN_HEADER};

use crate::error::ApiError;

/// Tenant hint forwarded by the tenant context middleware.
///
/// `Platform` covers root-domain requests, administrative requests and
/// requests that never passed through the middleware; handlers serve the
/// platform default for all three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestTenant {
    Platform,
    /// Candidate must be looked up by platform subdomain slug
    Slug(String),
    /// Candidate must be looked up by custom domain
    CustomDomain(String),
}

impl RequestTenant {
    pub fn candidate(&self) -> Option<&str> {
        match self {
            RequestTenant::Platform => None,
            RequestTenant::Slug(slug) => Some(slug),
            RequestTenant::CustomDomain(domain) => Some(domain),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestTenant
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let candidate = match parts.headers.get(TENANT_CANDIDATE_HEADER) {
            // Custom-domain candidates may carry non-ASCII hosts verbatim
            Some(value) => std::str::from_utf8(value.as_bytes()).map_err(|_| {
                ApiError::BadRequest("Malformed tenant candidate header".to_string())
            })?,
            None => return Ok(RequestTenant::Platform),
        };

        if candidate.is_empty() {
            return Ok(RequestTenant::Platform);
        }

        let is_custom_domain = parts
            .headers
            .get(TENANT_CUSTOM_DOMAIN_HEADER)
            .and_then(|v| v.to_str().ok());

        match is_custom_domain {
            Some("true") => Ok(RequestTenant::CustomDomain(candidate.to_string())),
            Some("false") => Ok(RequestTenant::Slug(candidate.to_string())),
            _ => Err(ApiError::BadRequest(
                "Malformed custom domain flag header".to_string(),
            )),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, Request};

    async fn extract(headers: &[(&str, &str)]) -> Result<RequestTenant, ApiError> {
        let mut builder = Request::builder().uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        RequestTenant::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_no_headers_is_platform() {
        assert_eq!(extract(&[]).await.unwrap(), RequestTenant::Platform);
    }

    #[tokio::test]
    async fn test_slug_and_custom_domain() {
        let tenant = extract(&[
            (TENANT_CANDIDATE_HEADER, "acme"),
            (TENANT_CUSTOM_DOMAIN_HEADER, "false"),
        ])
        .await
        .unwrap();
        assert_eq!(tenant, RequestTenant::Slug("acme".to_string()));
        assert_eq!(tenant.candidate(), Some("acme"));

        let tenant = extract(&[
            (TENANT_CANDIDATE_HEADER, "www.acme-electric.de"),
            (TENANT_CUSTOM_DOMAIN_HEADER, "true"),
        ])
        .await
        .unwrap();
        assert_eq!(
            tenant,
            RequestTenant::CustomDomain("www.acme-electric.de".to_string())
        );
    }

    #[tokio::test]
    async fn test_non_ascii_custom_domain() {
        let (mut parts, _) = Request::builder()
            .uri("/")
            .header(
                TENANT_CANDIDATE_HEADER,
                HeaderValue::from_bytes("münchen-shop.de".as_bytes()).unwrap(),
            )
            .header(TENANT_CUSTOM_DOMAIN_HEADER, "true")
            .body(())
            .unwrap()
            .into_parts();
        let tenant = RequestTenant::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(
            tenant,
            RequestTenant::CustomDomain("münchen-shop.de".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_or_bad_flag_is_rejected() {
        let result = extract(&[(TENANT_CANDIDATE_HEADER, "acme")]).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));

        let result = extract(&[
            (TENANT_CANDIDATE_HEADER, "acme"),
            (TENANT_CUSTOM_DOMAIN_HEADER, "yes"),
        ])
        .await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
