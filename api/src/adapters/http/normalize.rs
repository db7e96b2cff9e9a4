//! Feed entry normalization
//!
//! Translates parsed RSS/Atom entries into domain timeline items.

use feed_rs::model::Entry;
use sha2::{Digest, Sha256};
use url::Url;

use crate::domain::entities::{ItemId, TimelineItem};
use crate::error::FetchError;

/// Parse a raw feed payload and normalize every entry.
pub fn parse_feed(payload: &[u8], base: &Url) -> Result<Vec<TimelineItem>, FetchError> {
    let feed = feed_rs::parser::Builder::new()
        .base_uri(Some(base.as_str()))
        .build()
        .parse(payload)?;
    Ok(feed.entries.into_iter().map(normalize_entry).collect())
}

fn normalize_entry(entry: Entry) -> TimelineItem {
    let id = make_id(&entry);
    let author_url = entry
        .authors
        .first()
        .and_then(|person| person.uri.as_ref())
        .and_then(|uri| Url::parse(uri).ok());
    let author = entry
        .authors
        .into_iter()
        .next()
        .map(|person| person.name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "unknown".to_string());
    let summary = entry.summary.map(|text| text.content);
    // Prefer the full content block, fall back to the summary.
    let content_html = entry
        .content
        .and_then(|content| content.body)
        .or_else(|| summary.clone())
        .unwrap_or_default();
    let link = entry
        .links
        .into_iter()
        .find_map(|link| Url::parse(&link.href).ok());
    let published = entry.published.or(entry.updated);

    TimelineItem {
        id,
        author,
        author_url,
        content_html,
        summary,
        link,
        published,
        avatar_url: None,
    }
}

/// Stable synthetic identifier: hash of the entry's uniqueness fields.
/// Deterministic so the same post de-duplicates across fetches.
fn make_id(entry: &Entry) -> ItemId {
    let mut parts: Vec<&str> = Vec::new();
    if !entry.id.is_empty() {
        parts.push(&entry.id);
    }
    if let Some(link) = entry.links.first() {
        parts.push(&link.href);
    }
    if let Some(title) = &entry.title {
        parts.push(&title.content);
    }
    let digest = Sha256::digest(parts.join("|").as_bytes());
    ItemId(hex::encode(digest)[..24].to_string())
}
