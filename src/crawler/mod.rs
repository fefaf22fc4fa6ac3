//! Crawler module for listing page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - Blocking HTTP fetching behind the `Fetcher` trait
//! - Listing page parsing and row classification
//! - Endpoint construction for nested listings
//! - The depth-first walk that builds the channel tree

mod coordinator;
mod escape;
mod fetcher;
mod parser;

pub use coordinator::{CrawlStats, Crawler};
pub use escape::{child_endpoint, escape_path_segment, escape_spaces, media_url};
pub use fetcher::{build_http_client, user_agent_string, Fetcher, HttpFetcher};
pub use parser::{parse_listing, ListingRow};

use crate::config::Config;
use crate::tree::ChannelNode;
use crate::ChefError;

/// Runs a complete crawl over HTTP
///
/// This is the main entry point for building a channel. It will:
/// 1. Build the HTTP client from the user agent settings
/// 2. Create an empty channel from the channel metadata
/// 3. Walk the listing site from its root endpoint
///
/// The returned channel has not been validated yet.
///
/// # Arguments
///
/// * `config` - The chef configuration
///
/// # Returns
///
/// * `Ok((ChannelNode, CrawlStats))` - The populated channel and crawl counters
/// * `Err(ChefError)` - Crawl failed
pub fn crawl(config: &Config) -> Result<(ChannelNode, CrawlStats), ChefError> {
    let fetcher = HttpFetcher::new(&config.user_agent)?;
    crawl_with(config, &fetcher)
}

/// Runs a complete crawl through the given fetcher
pub fn crawl_with(
    config: &Config,
    fetcher: &dyn Fetcher,
) -> Result<(ChannelNode, CrawlStats), ChefError> {
    let mut channel = ChannelNode::from_config(&config.channel);
    let stats = Crawler::new(config, fetcher).crawl(&mut channel)?;
    Ok((channel, stats))
}
