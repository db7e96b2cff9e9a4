//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, Utc};

use crate::app::FeedUrlPolicy;
use crate::config::Config;
use crate::domain::entities::{ItemId, TimelineItem};

/// Create an undated test item. The seed doubles as the id.
pub fn test_item(seed: &str) -> TimelineItem {
    TimelineItem {
        id: ItemId(seed.to_string()),
        author: format!("author-{seed}"),
        author_url: None,
        content_html: format!("<p>post {seed}</p>"),
        summary: Some(format!("post {seed}")),
        link: None,
        published: None,
        avatar_url: None,
    }
}

/// Create a test item published at the given RFC 3339 instant.
pub fn test_item_at(seed: &str, published: &str) -> TimelineItem {
    TimelineItem {
        published: Some(
            DateTime::parse_from_rfc3339(published)
                .unwrap()
                .with_timezone(&Utc),
        ),
        ..test_item(seed)
    }
}

/// A policy that admits the TEST-NET hosts the mocks use.
pub fn test_policy() -> FeedUrlPolicy {
    FeedUrlPolicy::new(
        vec!["https".to_string(), "http".to_string()],
        false,
        vec![
            "192.0.2.10".to_string(),
            "192.0.2.11".to_string(),
            "192.0.2.12".to_string(),
        ],
    )
}

/// A config with defaults suitable for tests: no default feeds, no
/// environment reads.
pub fn test_config() -> Config {
    Config {
        default_feeds: Vec::new(),
        fetch_timeout_seconds: 5,
        cache_ttl_seconds: 120,
        user_agent: "timeline-api-tests".to_string(),
        max_feeds_per_request: 10,
        allowed_feed_schemes: vec!["https".to_string(), "http".to_string()],
        enforce_https_feeds: false,
        sanitize_html: true,
        allowed_feed_domain_suffixes: vec![
            "192.0.2.10".to_string(),
            "192.0.2.11".to_string(),
            "192.0.2.12".to_string(),
        ],
        security_headers_enabled: true,
        csp_allow_inline_scripts: false,
        fetch_concurrency: 5,
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
    }
}
