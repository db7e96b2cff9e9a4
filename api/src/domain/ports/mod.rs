//! Port traits
//!
//! Interfaces the application layer depends on. Implementations are
//! provided by adapters (HTTP in production, in-memory in tests).

pub mod feed_source;

pub use feed_source::FeedSource;
