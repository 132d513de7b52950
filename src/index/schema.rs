//! Database schema for the vector index

use rusqlite::Connection;

/// SQL schema for the index database
pub const SCHEMA_SQL: &str = r#"
-- One row per named collection; the dimension recorded here is enforced
-- on every upsert and query against the collection.
CREATE TABLE IF NOT EXISTS collections (
    name TEXT PRIMARY KEY,
    dimension INTEGER NOT NULL,
    created_at TEXT NOT NULL
);

-- Page records. The embedding is a little-endian f32 blob of exactly
-- `dimension` elements. UNIQUE(collection, doc_id) makes writes idempotent
-- upserts keyed by the stable per-URL identifier.
CREATE TABLE IF NOT EXISTS documents (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    collection TEXT NOT NULL REFERENCES collections(name),
    doc_id TEXT NOT NULL,
    url TEXT NOT NULL,
    text TEXT NOT NULL,
    embedding BLOB NOT NULL,
    stored_at TEXT NOT NULL,
    UNIQUE(collection, doc_id)
);

CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection);
"#;

/// Applies the schema to a connection; safe to run repeatedly
pub fn initialize_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)
}
