//! Markdown tree summary
//!
//! This module renders a human-readable outline of the channel: metadata,
//! counts, and every topic and video in tree order.

use crate::crawler::CrawlStats;
use crate::output::traits::{OutputResult, Publisher};
use crate::tree::{ChannelNode, ContentNode, TreeStats};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Formats a channel as a markdown outline
///
/// # Arguments
///
/// * `channel` - The channel tree
/// * `stats` - Crawl counters shown in the header
///
/// # Returns
///
/// A formatted markdown string
pub fn format_tree_markdown(channel: &ChannelNode, stats: &CrawlStats) -> String {
    let tree = TreeStats::from_channel(channel);
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", channel.title));
    if !channel.description.is_empty() {
        md.push_str(&format!("{}\n\n", channel.description));
    }

    md.push_str("## Channel Information\n\n");
    md.push_str(&format!("- **Source Domain**: {}\n", channel.source_domain));
    md.push_str(&format!("- **Source ID**: {}\n", channel.source_id));
    md.push_str(&format!("- **Language**: {}\n", channel.language));
    if let Some(thumbnail) = &channel.thumbnail {
        md.push_str(&format!("- **Thumbnail**: {}\n", thumbnail));
    }
    md.push('\n');

    md.push_str("## Statistics\n\n");
    md.push_str("| Metric | Count |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!("| Pages Fetched | {} |\n", stats.pages_fetched));
    md.push_str(&format!("| Topics | {} |\n", tree.topics));
    md.push_str(&format!("| Videos | {} |\n", tree.videos));
    md.push_str(&format!("| Skipped Rows | {} |\n", stats.skipped_rows));
    md.push_str(&format!("| Max Depth | {} |\n\n", tree.max_depth));

    md.push_str("## Content\n\n");
    if channel.children.is_empty() {
        md.push_str("_No content._\n");
    }
    for child in &channel.children {
        write_node(&mut md, child, 0);
    }

    md
}

fn write_node(md: &mut String, node: &ContentNode, level: usize) {
    let indent = "  ".repeat(level);
    match node {
        ContentNode::Topic(topic) => {
            md.push_str(&format!("{}- **{}/**\n", indent, topic.title));
            for child in &topic.children {
                write_node(md, child, level + 1);
            }
        }
        ContentNode::Video(video) => {
            let path = video.files.first().map(|f| f.path.as_str()).unwrap_or("");
            md.push_str(&format!("{}- {} (<{}>)\n", indent, video.title, path));
        }
    }
}

/// Writes the markdown outline to a file
pub struct MarkdownPublisher {
    path: PathBuf,
}

impl MarkdownPublisher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Publisher for MarkdownPublisher {
    fn name(&self) -> &str {
        "markdown summary"
    }

    fn publish(&self, channel: &ChannelNode, stats: &CrawlStats) -> OutputResult<()> {
        let markdown = format_tree_markdown(channel, stats);

        let mut file = File::create(&self.path)?;
        file.write_all(markdown.as_bytes())?;

        tracing::info!("Tree summary written to {}", self.path.display());
        Ok(())
    }
}
