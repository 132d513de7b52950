//! SQLite-backed vector index
//!
//! Stores embeddings as little-endian f32 blobs and answers similarity
//! queries by brute-force cosine ranking over the collection. Fine for the
//! per-site collection sizes a depth-limited crawl produces.

use crate::index::schema::initialize_schema;
use crate::index::traits::{IndexStore, QueryMatch, StorageError, StorageResult};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite index store
pub struct SqliteIndex {
    conn: Connection,
}

impl SqliteIndex {
    /// Opens (or creates) the index database at the given path
    pub fn open(path: &Path) -> StorageResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory index (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    fn collection_dimension(&self, name: &str) -> StorageResult<usize> {
        let dim: Option<i64> = self
            .conn
            .query_row(
                "SELECT dimension FROM collections WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;

        dim.map(|d| d as usize)
            .ok_or_else(|| StorageError::UnknownCollection(name.to_string()))
    }

    fn check_dimension(
        &self,
        collection: &str,
        expected: usize,
        actual: usize,
    ) -> StorageResult<()> {
        if expected != actual {
            return Err(StorageError::DimensionMismatch {
                collection: collection.to_string(),
                expected,
                actual,
            });
        }
        Ok(())
    }
}

/// Encodes a vector as a little-endian f32 blob
pub fn encode_vector(vector: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(vector.len() * 4);
    for v in vector {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    bytes
}

/// Decodes a little-endian f32 blob back into a vector
pub fn decode_vector(bytes: &[u8]) -> Option<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        return None;
    }
    Some(
        bytes
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect(),
    )
}

/// Cosine similarity; zero-norm inputs score 0
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

impl IndexStore for SqliteIndex {
    fn ensure_collection(&mut self, name: &str, dimension: usize) -> StorageResult<()> {
        let existing: Option<i64> = self
            .conn
            .query_row(
                "SELECT dimension FROM collections WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;

        match existing {
            Some(dim) => self.check_dimension(name, dim as usize, dimension),
            None => {
                let now = Utc::now().to_rfc3339();
                self.conn.execute(
                    "INSERT INTO collections (name, dimension, created_at) VALUES (?1, ?2, ?3)",
                    params![name, dimension as i64, now],
                )?;
                Ok(())
            }
        }
    }

    fn upsert(
        &mut self,
        collection: &str,
        doc_id: &str,
        vector: &[f32],
        text: &str,
        url: &str,
    ) -> StorageResult<()> {
        let dimension = self.collection_dimension(collection)?;
        self.check_dimension(collection, dimension, vector.len())?;

        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO documents (collection, doc_id, url, text, embedding, stored_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(collection, doc_id) DO UPDATE SET
                 url = excluded.url,
                 text = excluded.text,
                 embedding = excluded.embedding,
                 stored_at = excluded.stored_at",
            params![collection, doc_id, url, text, encode_vector(vector), now],
        )?;

        Ok(())
    }

    fn query(
        &mut self,
        collection: &str,
        vector: &[f32],
        k: usize,
    ) -> StorageResult<Vec<QueryMatch>> {
        let dimension = self.collection_dimension(collection)?;
        self.check_dimension(collection, dimension, vector.len())?;

        let mut stmt = self
            .conn
            .prepare("SELECT doc_id, url, text, embedding FROM documents WHERE collection = ?1")?;

        let rows = stmt.query_map(params![collection], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Vec<u8>>(3)?,
            ))
        })?;

        let mut matches = Vec::new();
        for row in rows {
            let (doc_id, url, text, blob) = row?;
            let stored =
                decode_vector(&blob).ok_or_else(|| StorageError::CorruptVector(doc_id))?;
            let score = cosine_similarity(vector, &stored);
            matches.push(QueryMatch { text, url, score });
        }

        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(k);
        Ok(matches)
    }

    fn count(&mut self, collection: &str) -> StorageResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM documents WHERE collection = ?1",
            params![collection],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }
}
