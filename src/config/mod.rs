//! Configuration module for sitesage
//!
//! Handles loading, parsing, and validating TOML configuration files.
//! All fields are defaulted, so a missing config file means defaults.

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, EmbedderConfig, IndexConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
