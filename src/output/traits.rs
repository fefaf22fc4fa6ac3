//! Publisher trait and error types
//!
//! A publisher receives the finished, validated channel once at the end of a
//! run. What it does with it (write a file, upload it) is up to the
//! implementation.

use crate::crawler::CrawlStats;
use crate::tree::ChannelNode;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for channel publishers
pub trait Publisher {
    /// Short name used in log messages
    fn name(&self) -> &str;

    /// Publishes a validated channel
    ///
    /// # Arguments
    ///
    /// * `channel` - The complete channel tree
    /// * `stats` - Counters from the crawl that produced it
    fn publish(&self, channel: &ChannelNode, stats: &CrawlStats) -> OutputResult<()>;
}
