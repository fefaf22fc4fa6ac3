//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building a blocking HTTP client with a proper user agent string
//! - GET requests for listing pages
//! - Mapping transport failures and non-success statuses to `ChefError`
//!
//! There is no retry. A failed fetch aborts the crawl.

use crate::config::UserAgentConfig;
use crate::ChefError;
use reqwest::blocking::Client;
use std::time::Duration;

/// Source of listing page bodies
///
/// The crawler only talks to the network through this trait, so tests can
/// serve canned HTML without a server.
pub trait Fetcher {
    /// Fetches the body of the page at `url`
    fn fetch(&self, url: &str) -> Result<String, ChefError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent_string(config))
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Formats the user agent as `CrawlerName/Version (+ContactURL; ContactEmail)`
pub fn user_agent_string(config: &UserAgentConfig) -> String {
    format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    )
}

/// Blocking HTTP fetcher backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a client built from the user agent settings
    pub fn new(config: &UserAgentConfig) -> Result<Self, ChefError> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Wraps an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, ChefError> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().map_err(|e| ChefError::Fetch {
            url: url.to_string(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChefError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|e| ChefError::Fetch {
            url: url.to_string(),
            source: e,
        })
    }
}
