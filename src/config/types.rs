use crate::tree::License;
use serde::Deserialize;

/// Main configuration structure for Solar-Chef
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub channel: ChannelConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Channel metadata published alongside the content tree
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Display name of the channel
    pub title: String,

    /// Who is providing the content
    #[serde(rename = "source-domain")]
    pub source_domain: String,

    /// Channel's unique id
    #[serde(rename = "source-id")]
    pub source_id: String,

    /// Language code of the channel
    pub language: String,

    pub description: String,

    /// Local path or URL to the channel thumbnail
    pub thumbnail: Option<String>,

    /// License applied to every video in the channel
    pub license: License,

    /// Required by every license except public domain
    #[serde(rename = "copyright-holder")]
    pub copyright_holder: Option<String>,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            title: "Solar Spell".to_string(),
            source_domain: "solarspell.org".to_string(),
            source_id: "sushi-chef-solar-spell-en".to_string(),
            language: "en".to_string(),
            description: "A solar-powered digital library of scholastic educational content \
                          and general reference resources."
                .to_string(),
            thumbnail: Some("thumbnail.jpg".to_string()),
            license: License::PublicDomain,
            copyright_holder: None,
        }
    }
}

/// Where and how the source listing is crawled
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Site root; media hrefs are resolved against it
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path of the root listing, relative to `base_url`
    #[serde(rename = "content-path")]
    pub content_path: String,

    /// Identifier suffix marking a media row
    #[serde(rename = "media-extension")]
    pub media_extension: String,

    /// Identifier prefix marking a directory row
    #[serde(rename = "directory-prefix")]
    pub directory_prefix: String,
}

impl SourceConfig {
    /// URL of the root listing page
    pub fn root_endpoint(&self) -> String {
        format!("{}{}", self.base_url, self.content_path)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://pacificschoolserver.org/".to_string(),
            content_path: "content/".to_string(),
            media_extension: ".mp4".to_string(),
            directory_prefix: "dir".to_string(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "SolarChef".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://solarspell.org/".to_string(),
            contact_email: "info@solarspell.org".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the JSON channel manifest
    #[serde(rename = "manifest-path")]
    pub manifest_path: String,

    /// Path of the markdown tree summary
    #[serde(rename = "summary-path")]
    pub summary_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            manifest_path: "./channel.json".to_string(),
            summary_path: "./channel.md".to_string(),
        }
    }
}
