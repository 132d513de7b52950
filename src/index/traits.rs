//! Index store trait and error types

use thiserror::Error;

/// Errors that can occur during index store operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("Vector dimension mismatch in collection {collection}: expected {expected}, got {actual}")]
    DimensionMismatch {
        collection: String,
        expected: usize,
        actual: usize,
    },

    #[error("Corrupt stored vector for document {0}")]
    CorruptVector(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for index store operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A ranked match returned by a similarity query
#[derive(Debug, Clone)]
pub struct QueryMatch {
    /// Stored page text
    pub text: String,
    /// Source URL metadata
    pub url: String,
    /// Cosine similarity against the query vector, higher is closer
    pub score: f32,
}

/// Persistent vector index, partitioned into named collections.
///
/// Writes are idempotent upserts keyed by a caller-provided stable document
/// id; re-storing the same id overwrites rather than duplicates. Collections
/// are created implicitly by `ensure_collection` and never deleted.
pub trait IndexStore: Send {
    /// Creates the collection if it does not exist; idempotent.
    ///
    /// The dimension recorded at creation is enforced on every later upsert
    /// and query against the collection.
    fn ensure_collection(&mut self, name: &str, dimension: usize) -> StorageResult<()>;

    /// Inserts or overwrites a document record
    fn upsert(
        &mut self,
        collection: &str,
        doc_id: &str,
        vector: &[f32],
        text: &str,
        url: &str,
    ) -> StorageResult<()>;

    /// Returns up to `k` stored records ranked by similarity to `vector`.
    ///
    /// An empty collection yields an empty vec, not an error.
    fn query(&mut self, collection: &str, vector: &[f32], k: usize)
        -> StorageResult<Vec<QueryMatch>>;

    /// Number of documents stored in a collection
    fn count(&mut self, collection: &str) -> StorageResult<u64>;
}
