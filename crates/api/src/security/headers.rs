//! Security Headers Middleware
//!
//! Adds a fixed set of defensive headers to every response, whatever the
//! tenant classification of the request and whatever the handler returned.

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Request, Response},
    middleware::Next,
};

/// The headers attached to every response
pub fn security_headers() -> [(HeaderName, HeaderValue); 3] {
    [
        // Prevent clickjacking attacks
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
        // Prevent MIME type sniffing
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
        // Control referrer information leakage
        (
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ),
    ]
}

/// Middleware that adds security headers to all responses
pub async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    for (name, value) in security_headers() {
        headers.insert(name, value);
    }

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    async fn test_handler() -> &'static str {
        "ok"
    }

    async fn failing_handler() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn app() -> Router {
        Router::new()
            .route("/", get(test_handler))
            .route("/fail", get(failing_handler))
            .fallback(|| async { StatusCode::NOT_FOUND })
            .layer(axum::middleware::from_fn(security_headers_middleware))
    }

    fn assert_security_headers(response: &Response<Body>) {
        assert_eq!(response.headers().get("X-Frame-Options").unwrap(), "DENY");
        assert_eq!(
            response.headers().get("X-Content-Type-Options").unwrap(),
            "nosniff"
        );
        assert_eq!(
            response.headers().get("Referrer-Policy").unwrap(),
            "strict-origin-when-cross-origin"
        );
    }

    #[tokio::test]
    async fn test_security_headers_are_added() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_security_headers(&response);
    }

    #[tokio::test]
    async fn test_security_headers_on_error_and_unrouted_responses() {
        let response = app()
            .oneshot(Request::builder().uri("/fail").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_security_headers(&response);

        let response = app()
            .oneshot(Request::builder().uri("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_security_headers(&response);
    }

    #[test]
    fn test_header_set_is_fixed() {
        let names: Vec<_> = security_headers().into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec![
                header::X_FRAME_OPTIONS,
                header::X_CONTENT_TYPE_OPTIONS,
                header::REFERRER_POLICY
            ]
        );
    }
}
