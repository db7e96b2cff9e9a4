//! Security headers middleware
//!
//! Injects common security headers on every response. Controlled via
//! config; designed to be inexpensive.

use axum::{
    extract::{Request, State},
    http::{header, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::AppState;

pub async fn security_headers(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    if !state.config.security_headers_enabled {
        return response;
    }

    let csp = build_csp(state.config.csp_allow_inline_scripts);
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_str(&csp).expect("CSP is plain ASCII"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("no-referrer"),
    );
    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static("geolocation=(), microphone=(), camera=()"),
    );
    headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static("max-age=63072000; includeSubDomains; preload"),
    );
    response
}

fn build_csp(allow_inline_scripts: bool) -> String {
    let mut parts = vec![
        "default-src 'self'",
        "img-src 'self' data: https:",
        "style-src 'self'",
        "object-src 'none'",
        "frame-ancestors 'none'",
        "base-uri 'none'",
        "form-action 'self'",
    ];
    if allow_inline_scripts {
        parts.push("script-src 'self' 'unsafe-inline'");
    } else {
        parts.push("script-src 'self'");
    }
    parts.join("; ")
}
