//! Embedding collaborator
//!
//! Maps text to a fixed-length vector. The crawler and query engine only
//! see the `Embedder` trait; the shipped implementation talks to an
//! OpenAI-compatible embeddings HTTP endpoint.

mod http;

pub use http::HttpEmbedder;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the embedding collaborator
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Embedding request failed: {0}")]
    Request(String),

    #[error("Embedding service returned HTTP {0}")]
    Http(u16),

    #[error("Malformed embedding response: {0}")]
    Response(String),

    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Maps text to a fixed-dimension vector.
///
/// The dimension is a configuration constant shared by the write and read
/// paths; a mismatch between stored records and live queries is a
/// configuration error, not a runtime one.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embeds a single text into a vector of `self.dimension()` floats
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError>;

    /// Output vector length of this embedder
    fn dimension(&self) -> usize;
}
