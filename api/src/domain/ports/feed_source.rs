//! Feed source port

use async_trait::async_trait;
use url::Url;

use crate::domain::entities::TimelineItem;
use crate::error::FetchError;

/// Retrieves a single feed and returns its entries as normalized timeline
/// items.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the feed at `url`.
    ///
    /// Implementations may serve a cached result instead of going to the
    /// network. A failure describes that one feed only; callers decide
    /// whether it is fatal.
    async fn fetch(&self, url: &Url) -> Result<Vec<TimelineItem>, FetchError>;
}
