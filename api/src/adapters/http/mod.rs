//! HTTP feed source
//!
//! Fetches RSS/Atom feeds over HTTP and normalizes them into timeline
//! items, with a small in-memory TTL cache to reduce network load.

mod client;
mod normalize;

pub use client::HttpFeedSource;
