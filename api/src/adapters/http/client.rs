//! HTTP feed source implementation

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use url::Url;

use super::normalize;
use crate::config::Config;
use crate::domain::entities::TimelineItem;
use crate::domain::ports::FeedSource;
use crate::error::FetchError;

const CACHE_CAPACITY: usize = 512;

struct CachedFeed {
    items: Vec<TimelineItem>,
    fetched_at: Instant,
}

/// Production `FeedSource`: a shared HTTP client plus a TTL cache keyed by
/// feed URL.
pub struct HttpFeedSource {
    http: reqwest::Client,
    cache: RwLock<HashMap<Url, CachedFeed>>,
    ttl: Duration,
}

impl HttpFeedSource {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_seconds))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            http,
            cache: RwLock::new(HashMap::new()),
            ttl: Duration::from_secs(config.cache_ttl_seconds),
        })
    }

    fn fresh(&self, url: &Url) -> Option<Vec<TimelineItem>> {
        let cache = self.cache.read().unwrap();
        cache
            .get(url)
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.items.clone())
    }

    fn store(&self, url: &Url, items: &[TimelineItem]) {
        let mut cache = self.cache.write().unwrap();
        if cache.len() >= CACHE_CAPACITY {
            let ttl = self.ttl;
            cache.retain(|_, entry| entry.fetched_at.elapsed() < ttl);
        }
        if cache.len() >= CACHE_CAPACITY {
            // Still full after dropping expired entries: evict the oldest.
            let oldest = cache
                .iter()
                .min_by_key(|(_, entry)| entry.fetched_at)
                .map(|(url, _)| url.clone());
            if let Some(oldest) = oldest {
                cache.remove(&oldest);
            }
        }
        cache.insert(
            url.clone(),
            CachedFeed {
                items: items.to_vec(),
                fetched_at: Instant::now(),
            },
        );
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self, url: &Url) -> Result<Vec<TimelineItem>, FetchError> {
        if let Some(items) = self.fresh(url) {
            return Ok(items);
        }

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let payload = response.bytes().await?;

        let items = normalize::parse_feed(payload.as_ref(), url)?;
        self.store(url, &items);
        Ok(items)
    }
}
