//! Solar-Chef: a directory-listing importer for the Solar Spell library
//!
//! This crate crawls the tree-structured HTML listing of a single source site,
//! builds a channel of topics and videos from it, validates the channel, and
//! hands it to a publisher.

pub mod config;
pub mod crawler;
pub mod output;
pub mod tree;

use thiserror::Error;

/// Main error type for Solar-Chef operations
#[derive(Debug, Error)]
pub enum ChefError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("Unexpected HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTML parse error for {url}: {message}")]
    HtmlParse { url: String, message: String },

    #[error("Malformed row '{source_id}' at {url}: {reason}")]
    MalformedRow {
        url: String,
        source_id: String,
        reason: String,
    },

    #[error("Invalid channel: {0}")]
    InvalidChannel(#[from] ValidationError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Problems found while checking a finished channel tree
#[derive(Debug, Error)]
#[error("{} problem(s) found: {}", .problems.len(), .problems.join("; "))]
pub struct ValidationError {
    pub problems: Vec<String>,
}

/// Result type alias for Solar-Chef operations
pub type Result<T> = std::result::Result<T, ChefError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlStats, Crawler, Fetcher, HttpFetcher};
pub use tree::{validate_channel, ChannelNode, ContentContainer, ContentNode, License};
