//! Timeline domain entities
//!
//! Normalized representations of feed entries, independent of the wire
//! format any particular source uses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Stable synthetic identifier for a timeline item.
///
/// Derived by hashing the entry's uniqueness fields, so the same post seen
/// through two fetches (or two overlapping feeds) collapses to one id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single post from a source feed, normalized for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineItem {
    pub id: ItemId,
    /// Display name or handle of the poster ("unknown" when the feed
    /// carries no author).
    pub author: String,
    /// Link to the author's profile, when the feed provides one.
    pub author_url: Option<Url>,
    /// Renderable HTML body (sanitized before it reaches the wire when
    /// sanitization is enabled).
    pub content_html: String,
    /// Plain-text / summary fallback content.
    pub summary: Option<String>,
    /// Permalink to the original post.
    pub link: Option<Url>,
    /// Publication time, UTC.
    pub published: Option<DateTime<Utc>>,
    /// Avatar image URL. Not populated by any current source; kept on the
    /// wire for forward compatibility.
    pub avatar_url: Option<Url>,
}

/// An aggregated slice of timeline items, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    pub items: Vec<TimelineItem>,
    /// Opaque cursor for the next page. Always null until pagination lands.
    pub next_cursor: Option<String>,
    /// Opaque cursor for the previous page. Always null until pagination lands.
    pub prev_cursor: Option<String>,
}

impl Timeline {
    pub fn new(items: Vec<TimelineItem>) -> Self {
        Self {
            items,
            next_cursor: None,
            prev_cursor: None,
        }
    }
}
