//! HTTP embedding service client
//!
//! Speaks the OpenAI-compatible embeddings JSON shape:
//! `POST {endpoint}` with `{"model": ..., "input": [text]}` returning
//! `{"data": [{"embedding": [...]}]}`. Retries 429 and 5xx responses with a
//! short delay, up to the configured budget.

use crate::config::EmbedderConfig;
use crate::embedder::{EmbedError, Embedder};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const RETRY_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: Vec<&'a str>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingRow>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingRow {
    embedding: Vec<f32>,
}

/// Embeddings client for an OpenAI-compatible HTTP endpoint
pub struct HttpEmbedder {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    dimension: usize,
    max_retries: usize,
}

impl HttpEmbedder {
    /// Builds a client from the embedder configuration
    pub fn new(config: &EmbedderConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            dimension: config.dimension,
            max_retries: config.max_retries.max(1),
        })
    }

    async fn send_request(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let payload = EmbeddingRequest {
            model: &self.model,
            input: vec![text],
        };

        let mut attempt = 0usize;
        loop {
            attempt += 1;

            let mut request = self.client.post(&self.endpoint).json(&payload);
            if let Some(key) = &self.api_key {
                request = request.bearer_auth(key);
            }

            let response = match request.send().await {
                Ok(r) => r,
                Err(e) => {
                    if attempt < self.max_retries {
                        tracing::debug!(
                            "Embedding request error (attempt {}): {}",
                            attempt,
                            e
                        );
                        tokio::time::sleep(RETRY_DELAY).await;
                        continue;
                    }
                    return Err(EmbedError::Request(e.to_string()));
                }
            };

            let status = response.status();
            if retryable(status) && attempt < self.max_retries {
                tracing::debug!(
                    "Embedding service returned {} (attempt {}), retrying",
                    status,
                    attempt
                );
                tokio::time::sleep(RETRY_DELAY).await;
                continue;
            }

            if !status.is_success() {
                return Err(EmbedError::Http(status.as_u16()));
            }

            let parsed: EmbeddingResponse = response
                .json()
                .await
                .map_err(|e| EmbedError::Response(e.to_string()))?;

            let row = parsed
                .data
                .into_iter()
                .next()
                .ok_or_else(|| EmbedError::Response("empty data array".to_string()))?;

            return Ok(row.embedding);
        }
    }
}

fn retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let vector = self.send_request(text).await?;

        if vector.len() != self.dimension {
            return Err(EmbedError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }

        Ok(vector)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmbedderConfig;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = EmbedderConfig {
            endpoint: "http://localhost:9000/v1/embeddings/".to_string(),
            ..EmbedderConfig::default()
        };
        let embedder = HttpEmbedder::new(&config).unwrap();
        assert_eq!(embedder.endpoint, "http://localhost:9000/v1/embeddings");
    }

    #[test]
    fn test_dimension_reported() {
        let config = EmbedderConfig {
            dimension: 8,
            ..EmbedderConfig::default()
        };
        let embedder = HttpEmbedder::new(&config).unwrap();
        assert_eq!(embedder.dimension(), 8);
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(retryable(StatusCode::TOO_MANY_REQUESTS));
        assert!(retryable(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(retryable(StatusCode::BAD_GATEWAY));
        assert!(!retryable(StatusCode::BAD_REQUEST));
        assert!(!retryable(StatusCode::NOT_FOUND));
        assert!(!retryable(StatusCode::OK));
    }
}
