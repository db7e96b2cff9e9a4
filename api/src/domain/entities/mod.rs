//! Domain entities

pub mod timeline;

pub use timeline::{ItemId, Timeline, TimelineItem};
