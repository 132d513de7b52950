//! Sitesage: crawl a site, embed its pages, and ask it questions
//!
//! This crate implements a breadth-limited site crawler that extracts the
//! paragraph text of every page it visits, computes a semantic embedding for
//! it, and persists text + embedding + source URL in a per-host vector index.
//! Free-text queries are answered by top-1 similarity retrieval against the
//! index a crawl populated.

pub mod config;
pub mod crawler;
pub mod embedder;
pub mod index;
pub mod query;
pub mod url;

use thiserror::Error;

/// Main error type for sitesage operations
#[derive(Debug, Error)]
pub enum SageError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Embedding error: {0}")]
    Embed(#[from] embedder::EmbedError),

    #[error("Index store error: {0}")]
    Store(#[from] index::StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
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

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL: {0}")]
    MissingHost(String),
}

/// Result type alias for sitesage operations
pub type Result<T> = std::result::Result<T, SageError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlSummary, Crawler};
pub use embedder::Embedder;
pub use index::{IndexStore, QueryMatch};
pub use query::{QueryEngine, QueryResult};
pub use url::{collection_name, document_id};
