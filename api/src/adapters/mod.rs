//! Adapters
//!
//! Concrete implementations of the domain ports.

pub mod http;

pub use http::HttpFeedSource;
