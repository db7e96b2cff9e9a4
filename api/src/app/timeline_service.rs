//! Timeline service
//!
//! Aggregates multiple source feeds into a single timeline: applies the
//! URL policy, fetches permitted feeds concurrently, then de-duplicates,
//! sorts newest first, truncates, and sanitizes.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use url::Url;

use crate::app::sanitize::sanitize_html;
use crate::app::url_policy::FeedUrlPolicy;
use crate::domain::entities::{ItemId, Timeline, TimelineItem};
use crate::domain::ports::FeedSource;

pub struct TimelineService<S: FeedSource> {
    source: Arc<S>,
    policy: FeedUrlPolicy,
    max_feeds: usize,
    sanitize: bool,
}

impl<S: FeedSource> TimelineService<S> {
    pub fn new(source: Arc<S>, policy: FeedUrlPolicy, max_feeds: usize, sanitize: bool) -> Self {
        Self {
            source,
            policy,
            max_feeds,
            sanitize,
        }
    }

    /// Build a timeline from the given candidate feed URLs.
    ///
    /// A feed that fails policy, fetching, or parsing is skipped; the
    /// request itself never fails because one source did.
    pub async fn build_timeline(&self, feed_urls: &[String], limit: usize) -> Timeline {
        let permitted = self.permitted_urls(feed_urls).await;

        let fetches = permitted.iter().map(|url| async move {
            match self.source.fetch(url).await {
                Ok(items) => items,
                Err(err) => {
                    tracing::warn!(url = %url, error = %err, "feed fetch failed");
                    Vec::new()
                }
            }
        });
        let batches = join_all(fetches).await;

        let mut items = dedupe(batches.into_iter().flatten());
        items.sort_by(|a, b| b.published.cmp(&a.published));
        items.truncate(limit);

        if self.sanitize {
            for item in &mut items {
                item.content_html = sanitize_html(&item.content_html);
            }
        }

        Timeline::new(items)
    }

    async fn permitted_urls(&self, feed_urls: &[String]) -> Vec<Url> {
        let mut permitted = Vec::new();
        for raw in feed_urls {
            if permitted.len() >= self.max_feeds {
                break;
            }
            let Ok(url) = Url::parse(raw) else {
                tracing::debug!(feed = raw, "ignoring unparseable feed url");
                continue;
            };
            if self.policy.permits(&url).await {
                permitted.push(url);
            } else {
                tracing::debug!(feed = raw, "feed url rejected by policy");
            }
        }
        permitted
    }
}

/// Collapse duplicate ids, keeping the later occurrence, without
/// disturbing first-seen order.
fn dedupe(items: impl Iterator<Item = TimelineItem>) -> Vec<TimelineItem> {
    let mut order: Vec<TimelineItem> = Vec::new();
    let mut index: HashMap<ItemId, usize> = HashMap::new();
    for item in items {
        match index.get(&item.id) {
            Some(&at) => order[at] = item,
            None => {
                index.insert(item.id.clone(), order.len());
                order.push(item);
            }
        }
    }
    order
}
