//! Application layer
//!
//! Services orchestrating feed retrieval into an aggregated timeline.

pub mod sanitize;
pub mod timeline_service;
pub mod url_policy;

pub use timeline_service::TimelineService;
pub use url_policy::FeedUrlPolicy;
