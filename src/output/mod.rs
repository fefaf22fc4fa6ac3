//! Output module for publishing the finished channel
//!
//! This module handles:
//! - Writing the JSON channel manifest
//! - Generating a markdown outline of the tree
//! - Running every configured publisher in order

mod manifest;
mod markdown;
mod traits;

pub use manifest::{ChannelManifest, ManifestPublisher};
pub use markdown::{format_tree_markdown, MarkdownPublisher};
pub use traits::{OutputError, OutputResult, Publisher};

use crate::crawler::CrawlStats;
use crate::tree::ChannelNode;

/// Hands the channel to each publisher, stopping at the first failure
pub fn publish_all(
    publishers: &[Box<dyn Publisher>],
    channel: &ChannelNode,
    stats: &CrawlStats,
) -> OutputResult<()> {
    for publisher in publishers {
        tracing::debug!("Running {} publisher", publisher.name());
        publisher.publish(channel, stats)?;
    }
    Ok(())
}
