//! HTTP fetcher
//!
//! One GET per page with a fixed timeout. The crawler treats every failure
//! here as a per-page condition; nothing in this module aborts a crawl.

use crate::config::CrawlerConfig;
use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchOutcome {
    /// 2xx response with a body
    Success {
        /// Final URL after redirects
        final_url: String,
        /// Raw response body
        body: String,
    },

    /// Non-success HTTP status
    HttpError { status: u16 },

    /// Transport-level failure
    NetworkError { kind: NetworkErrorKind, error: String },
}

/// Classification of transport failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkErrorKind {
    Timeout,
    Connection,
    Other,
}

/// Builds the HTTP client used for all page fetches
///
/// The total request timeout comes from `fetch_timeout_secs` (default 5 s);
/// a stalled fetch surfaces as a per-page timeout, never a hung crawl.
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .connect_timeout(Duration::from_secs(config.fetch_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the outcome
pub async fn fetch_url(client: &Client, url: &str) -> FetchOutcome {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if !status.is_success() {
                return FetchOutcome::HttpError {
                    status: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Success { final_url, body },
                Err(e) => FetchOutcome::NetworkError {
                    kind: NetworkErrorKind::Other,
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            let kind = if e.is_timeout() {
                NetworkErrorKind::Timeout
            } else if e.is_connect() {
                NetworkErrorKind::Connection
            } else {
                NetworkErrorKind::Other
            };
            FetchOutcome::NetworkError {
                kind,
                error: e.to_string(),
            }
        }
    }
}
