//! Solar-Chef main entry point
//!
//! This is the command-line interface for the Solar Spell channel importer.

use clap::Parser;
use solar_chef::config::{load_config, Config};
use solar_chef::crawler::{crawl, CrawlStats};
use solar_chef::output::{
    format_tree_markdown, publish_all, ManifestPublisher, MarkdownPublisher, Publisher,
};
use solar_chef::tree::{validate_channel, ChannelNode};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Solar-Chef: imports the Solar Spell video library as a content channel
///
/// Solar-Chef walks the library's directory listing, turns folders into
/// topics and .mp4 files into videos, validates the resulting channel, and
/// writes it out as a JSON manifest plus a markdown outline.
#[derive(Parser, Debug)]
#[command(name = "solar-chef")]
#[command(version)]
#[command(about = "Imports the Solar Spell library as a content channel", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in Solar Spell settings if omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Crawl and validate, print the tree outline, and publish nothing
    #[arg(long)]
    dry_run: bool,

    /// Write the JSON manifest here instead of the configured path
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Write the markdown outline here instead of the configured path
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config(path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("Using built-in Solar Spell configuration");
            Config::default()
        }
    };

    let (channel, stats) = match build_channel(&config) {
        Ok(built) => built,
        Err(e) => {
            tracing::error!("Channel construction failed: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&channel, &stats);
    } else {
        handle_publish(&config, &cli, &channel, &stats)?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("solar_chef=info,warn"),
            1 => EnvFilter::new("solar_chef=debug,info"),
            2 => EnvFilter::new("solar_chef=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Crawls the site and runs the channel validation check
fn build_channel(config: &Config) -> solar_chef::Result<(ChannelNode, CrawlStats)> {
    let (channel, stats) = crawl(config)?;
    validate_channel(&channel)?;
    Ok((channel, stats))
}

/// Handles the --dry-run mode: prints the outline instead of publishing
fn handle_dry_run(channel: &ChannelNode, stats: &CrawlStats) {
    println!("=== Solar-Chef Dry Run ===\n");
    print!("{}", format_tree_markdown(channel, stats));
    println!("\n✓ Channel is valid");
    println!("✓ Nothing was published");
}

/// Hands the validated channel to every publisher
fn handle_publish(
    config: &Config,
    cli: &Cli,
    channel: &ChannelNode,
    stats: &CrawlStats,
) -> Result<(), Box<dyn std::error::Error>> {
    let manifest_path = cli
        .manifest
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.manifest_path));
    let summary_path = cli
        .summary
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.summary_path));

    let publishers: Vec<Box<dyn Publisher>> = vec![
        Box::new(ManifestPublisher::new(manifest_path)),
        Box::new(MarkdownPublisher::new(summary_path)),
    ];

    match publish_all(&publishers, channel, stats) {
        Ok(()) => {
            tracing::info!(
                "Published '{}': {} topics, {} videos",
                channel.title,
                stats.topics,
                stats.videos
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Publishing failed: {}", e);
            Err(e.into())
        }
    }
}
