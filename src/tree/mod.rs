//! Channel tree module
//!
//! This module holds the in-memory content tree that the crawler builds:
//! - Channel, topic and video nodes
//! - Content licenses
//! - Tree statistics
//! - The validation check run before publishing

mod license;
mod node;
mod stats;
mod validation;

pub use license::License;
pub use node::{ChannelNode, ContentContainer, ContentNode, TopicNode, VideoFile, VideoNode};
pub use stats::TreeStats;
pub use validation::validate_channel;
