//! Timeline endpoint
//!
//! `GET /api/timeline` — aggregate the requested feeds into a timeline.
//!
//! The `feeds` parameter is repeatable, and each value may itself be a
//! comma-separated list; serde-backed `Query` cannot express repeated
//! keys, so the raw query string is parsed here.

use axum::extract::{RawQuery, State};
use axum::Json;
use url::form_urlencoded;

use crate::domain::entities::Timeline;
use crate::error::AppError;
use crate::AppState;

const DEFAULT_LIMIT: usize = 100;
const MAX_LIMIT: usize = 500;

#[derive(Debug, PartialEq, Eq)]
struct TimelineQuery {
    feeds: Vec<String>,
    limit: usize,
}

impl Default for TimelineQuery {
    fn default() -> Self {
        Self {
            feeds: Vec::new(),
            limit: DEFAULT_LIMIT,
        }
    }
}

/// GET /api/timeline
///
/// Query parameters:
/// - `feeds`: repeatable feed URL(s). If none survive parsing, the
///   configured default feeds are used.
/// - `limit`: maximum number of items returned (default 100, max 500).
pub async fn get_timeline(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Timeline>, AppError> {
    let query = parse_query(query.as_deref())?;
    let feeds = if query.feeds.is_empty() {
        state.config.default_feeds.clone()
    } else {
        query.feeds
    };

    let timeline = state
        .timeline_service
        .build_timeline(&feeds, query.limit)
        .await;
    Ok(Json(timeline))
}

fn parse_query(raw: Option<&str>) -> Result<TimelineQuery, AppError> {
    let Some(raw) = raw else {
        return Ok(TimelineQuery::default());
    };

    let mut query = TimelineQuery::default();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "feeds" => query.feeds.extend(split_feed_tokens(&value)),
            "limit" => {
                let limit: usize = value
                    .parse()
                    .map_err(|_| AppError::BadRequest(format!("invalid limit: {value}")))?;
                if !(1..=MAX_LIMIT).contains(&limit) {
                    return Err(AppError::BadRequest(format!(
                        "limit must be between 1 and {MAX_LIMIT}"
                    )));
                }
                query.limit = limit;
            }
            _ => {}
        }
    }
    Ok(query)
}

/// Split a raw feeds value on commas into trimmed, non-empty tokens,
/// preserving their relative order.
fn split_feed_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}
