//! Crawler coordinator - the depth-first listing walk
//!
//! Each call to [`Crawler::scrape`] fetches one listing page and appends one
//! node per recognised row to the given parent. Directory rows are linked
//! into the tree before their own listing is fetched, and each directory's
//! subtree is finished before the next sibling row is looked at.

use crate::config::{ChannelConfig, Config, SourceConfig};
use crate::crawler::escape::{child_endpoint, media_url};
use crate::crawler::parser::{parse_listing, ListingRow};
use crate::crawler::Fetcher;
use crate::tree::{ChannelNode, ContentContainer, ContentNode, TopicNode, VideoFile, VideoNode};
use crate::ChefError;
use serde::Serialize;

/// Counters collected while crawling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CrawlStats {
    /// Listing pages fetched, the root included
    pub pages_fetched: u64,
    pub topics: u64,
    pub videos: u64,
    /// Rows that were neither media nor directories
    pub skipped_rows: u64,
}

/// Walks the listing site and builds the channel tree
pub struct Crawler<'a> {
    source: &'a SourceConfig,
    channel: &'a ChannelConfig,
    fetcher: &'a dyn Fetcher,
    stats: CrawlStats,
}

impl<'a> Crawler<'a> {
    /// Creates a crawler over the configured site, fetching through `fetcher`
    pub fn new(config: &'a Config, fetcher: &'a dyn Fetcher) -> Self {
        Self {
            source: &config.source,
            channel: &config.channel,
            fetcher,
            stats: CrawlStats::default(),
        }
    }

    /// Crawls from the root listing into `channel`
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlStats)` - The whole site was walked
    /// * `Err(ChefError)` - A fetch or parse failed; the crawl stops there
    pub fn crawl(mut self, channel: &mut ChannelNode) -> Result<CrawlStats, ChefError> {
        tracing::info!("Constructing channel from {}", self.source.base_url);
        tracing::info!("Writing {} folder", channel.title);

        let root = self.source.root_endpoint();
        self.scrape(&root, channel)?;

        tracing::info!(
            "Crawl finished: {} pages, {} topics, {} videos, {} skipped rows",
            self.stats.pages_fetched,
            self.stats.topics,
            self.stats.videos,
            self.stats.skipped_rows
        );
        Ok(self.stats)
    }

    /// Fetches the listing at `endpoint` and appends its rows to `parent`
    ///
    /// Recurses into every directory row with the new topic as parent.
    pub fn scrape(
        &mut self,
        endpoint: &str,
        parent: &mut dyn ContentContainer,
    ) -> Result<(), ChefError> {
        let body = self.fetcher.fetch(endpoint)?;
        self.stats.pages_fetched += 1;

        let rows = parse_listing(&body, endpoint, self.source)?;
        tracing::debug!("{} rows at {}", rows.len(), endpoint);

        for row in rows {
            match row {
                ListingRow::Media {
                    source_id,
                    title,
                    href,
                } => {
                    let path = media_url(&self.source.base_url, &href);
                    tracing::debug!("Adding video '{}' from {}", title, path);

                    parent.add_child(ContentNode::Video(VideoNode {
                        source_id,
                        title,
                        files: vec![VideoFile { path }],
                        license: self.channel.license,
                        copyright_holder: self.channel.copyright_holder.clone(),
                    }));
                    self.stats.videos += 1;
                }
                ListingRow::Directory { source_id, title } => {
                    let next = child_endpoint(endpoint, &title);
                    tracing::info!("Writing {} folder", title);

                    let added = parent.add_child(ContentNode::Topic(TopicNode::new(source_id, title)));
                    self.stats.topics += 1;

                    if let Some(topic) = added.as_topic_mut() {
                        self.scrape(&next, topic)?;
                    }
                }
                ListingRow::Unsupported { source_id } => {
                    tracing::info!(
                        "Format of the file is not supported: {}",
                        source_id.as_deref().unwrap_or("<no identifier>")
                    );
                    self.stats.skipped_rows += 1;
                }
            }
        }

        Ok(())
    }
}
