//! HTTP handlers
//!
//! Axum request handlers for the API and page endpoints.

pub mod pages;
pub mod timeline;

pub use pages::{app_js, home, style_css};
pub use timeline::get_timeline;
