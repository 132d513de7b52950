//! Query engine
//!
//! Embeds a free-text question and retrieves the single most similar stored
//! page from a named collection. A pure read path: no crawl state changes.

use crate::embedder::Embedder;
use crate::index::IndexStore;
use crate::SageError;
use std::sync::{Arc, Mutex};

/// Best-match answer for a query
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// Stored page text of the top match
    pub text: String,
    /// URL the text was crawled from
    pub url: String,
}

/// Answers questions against collections a crawl populated
pub struct QueryEngine {
    embedder: Arc<dyn Embedder>,
    store: Arc<Mutex<dyn IndexStore>>,
}

impl QueryEngine {
    /// Creates a query engine around the same collaborators the crawler used
    pub fn new(embedder: Arc<dyn Embedder>, store: Arc<Mutex<dyn IndexStore>>) -> Self {
        Self { embedder, store }
    }

    /// Returns the top-1 match for `query_text` in `collection`.
    ///
    /// An empty collection or a store with no matches yields `Ok(None)` —
    /// a valid empty outcome, not an error.
    pub async fn answer(
        &self,
        query_text: &str,
        collection: &str,
    ) -> Result<Option<QueryResult>, SageError> {
        let vector = self.embedder.embed(query_text).await?;

        let matches = self.store.lock().unwrap().query(collection, &vector, 1)?;

        Ok(matches.into_iter().next().map(|m| {
            tracing::debug!("Top match for query: {} (score {:.4})", m.url, m.score);
            QueryResult {
                text: m.text,
                url: m.url,
            }
        }))
    }
}
