//! Mock implementations of port traits
//!
//! In-memory feed source that can be configured per-URL and records the
//! fetches it serves.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use crate::domain::entities::TimelineItem;
use crate::domain::ports::FeedSource;
use crate::error::FetchError;

#[derive(Default)]
pub struct InMemoryFeedSource {
    feeds: RwLock<HashMap<Url, Vec<TimelineItem>>>,
    failing: RwLock<HashSet<Url>>,
    calls: RwLock<Vec<Url>>,
}

impl InMemoryFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `items` for `url`.
    pub fn with_feed(self, url: &str, items: Vec<TimelineItem>) -> Self {
        self.feeds
            .write()
            .unwrap()
            .insert(Url::parse(url).unwrap(), items);
        self
    }

    /// Make fetches of `url` fail.
    pub fn with_failing(self, url: &str) -> Self {
        self.failing.write().unwrap().insert(Url::parse(url).unwrap());
        self
    }

    /// URLs fetched so far, in call order.
    pub fn calls(&self) -> Vec<Url> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl FeedSource for InMemoryFeedSource {
    async fn fetch(&self, url: &Url) -> Result<Vec<TimelineItem>, FetchError> {
        self.calls.write().unwrap().push(url.clone());

        if self.failing.read().unwrap().contains(url) {
            return Err(FetchError::Status(StatusCode::SERVICE_UNAVAILABLE));
        }
        Ok(self
            .feeds
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_default())
    }
}
