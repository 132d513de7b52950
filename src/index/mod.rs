//! Vector index storage
//!
//! Persists page records (url, text, embedding) in named per-host
//! collections and answers nearest-neighbor queries. The crawler and query
//! engine depend on the `IndexStore` trait; `SqliteIndex` is the shipped
//! backend.

mod schema;
mod sqlite;
mod traits;

pub use schema::initialize_schema;
pub use sqlite::{cosine_similarity, SqliteIndex};
pub use traits::{IndexStore, QueryMatch, StorageError, StorageResult};
