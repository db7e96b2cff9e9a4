//! Page and static asset handlers
//!
//! The HTML shell renders empty and hydrates client-side via
//! `/api/timeline`. Assets are embedded so the binary is self-contained.

use axum::http::header;
use axum::response::{Html, IntoResponse};

/// GET /
pub async fn home() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// GET /static/app.js
pub async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        include_str!("../../static/app.js"),
    )
}

/// GET /static/style.css
pub async fn style_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../static/style.css"),
    )
}
