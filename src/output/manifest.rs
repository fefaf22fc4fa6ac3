//! JSON channel manifest
//!
//! The manifest is the hand-off format for the content platform: channel
//! metadata, the full topic/video tree, and counters about the run.

use crate::crawler::CrawlStats;
use crate::output::traits::{OutputResult, Publisher};
use crate::tree::{ChannelNode, TreeStats};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Serialized form of a published channel
#[derive(Debug, Serialize)]
pub struct ChannelManifest<'a> {
    pub generated_at: DateTime<Utc>,
    pub generator: String,
    pub crawl: CrawlStats,
    pub tree: TreeStats,
    pub channel: &'a ChannelNode,
}

impl<'a> ChannelManifest<'a> {
    pub fn new(channel: &'a ChannelNode, stats: &CrawlStats) -> Self {
        Self {
            generated_at: Utc::now(),
            generator: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            crawl: *stats,
            tree: TreeStats::from_channel(channel),
            channel,
        }
    }
}

/// Writes the channel manifest as pretty-printed JSON
pub struct ManifestPublisher {
    path: PathBuf,
}

impl ManifestPublisher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Publisher for ManifestPublisher {
    fn name(&self) -> &str {
        "manifest"
    }

    fn publish(&self, channel: &ChannelNode, stats: &CrawlStats) -> OutputResult<()> {
        let manifest = ChannelManifest::new(channel, stats);

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &manifest)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        tracing::info!("Channel manifest written to {}", self.path.display());
        Ok(())
    }
}
