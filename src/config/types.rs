use serde::Deserialize;

/// Main configuration structure for sitesage
///
/// Every field has a default so the CLI can run without a config file;
/// a TOML file only needs to override what differs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub embedder: EmbedderConfig,
    #[serde(default)]
    pub index: IndexConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum depth to crawl from each seed URL (inclusive)
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: u32,

    /// Per-request fetch timeout in seconds
    #[serde(rename = "fetch-timeout-secs", default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Pause between processed URLs in milliseconds
    #[serde(rename = "request-delay-ms", default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// User agent string sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// File extensions whose URLs are never crawled (matched as ".ext" suffix)
    #[serde(rename = "denied-extensions", default = "default_denied_extensions")]
    pub denied_extensions: Vec<String>,

    /// Whether the extension filter compares case-sensitively.
    ///
    /// The default deny list deliberately carries one uppercase "JPG" entry
    /// alongside lowercase "jpg"; turning this off lowercases both sides and
    /// makes the uppercase entry redundant.
    #[serde(rename = "case-sensitive-extensions", default = "default_true")]
    pub case_sensitive_extensions: bool,
}

/// Embedding service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EmbedderConfig {
    /// Embeddings endpoint (OpenAI-compatible JSON API)
    #[serde(default = "default_embedder_endpoint")]
    pub endpoint: String,

    /// Model identifier passed to the service
    #[serde(default = "default_embedder_model")]
    pub model: String,

    /// Optional bearer API key
    #[serde(rename = "api-key", default)]
    pub api_key: Option<String>,

    /// Output vector dimension; shared by the write and read paths
    #[serde(default = "default_dimension")]
    pub dimension: usize,

    /// Retry budget for 429/5xx responses
    #[serde(rename = "max-retries", default = "default_max_retries")]
    pub max_retries: usize,
}

/// Vector index configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    /// Path to the SQLite database file backing the index
    #[serde(rename = "database-path", default = "default_database_path")]
    pub database_path: String,
}

fn default_max_depth() -> u32 {
    2
}

fn default_fetch_timeout_secs() -> u64 {
    5
}

fn default_request_delay_ms() -> u64 {
    1000
}

fn default_user_agent() -> String {
    format!("sitesage/{}", env!("CARGO_PKG_VERSION"))
}

fn default_denied_extensions() -> Vec<String> {
    // Inherited verbatim from the reference crawler, uppercase JPG included.
    ["pdf", "doc", "xls", "png", "jpg", "gif", "jpeg", "JPG"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

fn default_embedder_endpoint() -> String {
    "http://127.0.0.1:8080/v1/embeddings".to_string()
}

fn default_embedder_model() -> String {
    "all-MiniLM-L6-v2".to_string()
}

fn default_dimension() -> usize {
    384
}

fn default_max_retries() -> usize {
    3
}

fn default_database_path() -> String {
    "./sitesage.db".to_string()
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            request_delay_ms: default_request_delay_ms(),
            user_agent: default_user_agent(),
            denied_extensions: default_denied_extensions(),
            case_sensitive_extensions: default_true(),
        }
    }
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_embedder_endpoint(),
            model: default_embedder_model(),
            api_key: None,
            dimension: default_dimension(),
            max_retries: default_max_retries(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}
