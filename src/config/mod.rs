//! Configuration module for Solar-Chef
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; missing values fall back to the Solar Spell defaults.
//!
//! # Example
//!
//! ```no_run
//! use solar_chef::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("chef.toml")).unwrap();
//! println!("Crawling from: {}", config.source.root_endpoint());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ChannelConfig, Config, OutputConfig, SourceConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
