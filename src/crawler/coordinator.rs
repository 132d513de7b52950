//! Crawl orchestration
//!
//! The main crawl loop: pull from the frontier, fetch, extract paragraph
//! text and links, embed and upsert into the per-seed collection, enqueue
//! eligible discoveries, pace requests. One fetch in flight at a time, in
//! strict FIFO order; a single page failure never aborts the crawl.

use crate::config::Config;
use crate::crawler::extractor::extract_page;
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchOutcome};
use crate::crawler::frontier::{CrawlTask, Frontier};
use crate::embedder::Embedder;
use crate::index::IndexStore;
use crate::url::{collection_name, document_id, is_eligible, resolve, ExtensionPolicy};
use crate::{SageError, UrlError};
use reqwest::Client;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

/// Outcome of a completed crawl run
#[derive(Debug, Clone, Copy)]
pub struct CrawlSummary {
    /// Distinct URLs fetched across all seeds
    pub urls_visited: usize,
    /// Pages successfully embedded and stored
    pub pages_indexed: usize,
}

/// Drives the frontier loop against injected collaborators
///
/// The embedder and index store are constructed by the caller and passed in;
/// the crawler holds no global state and can be driven with fakes in tests.
pub struct Crawler {
    config: Arc<Config>,
    client: Client,
    embedder: Arc<dyn Embedder>,
    store: Arc<Mutex<dyn IndexStore>>,
}

impl Crawler {
    /// Creates a new crawler around the given collaborators
    pub fn new(
        config: Config,
        embedder: Arc<dyn Embedder>,
        store: Arc<Mutex<dyn IndexStore>>,
    ) -> Result<Self, SageError> {
        let client = build_http_client(&config.crawler)?;
        Ok(Self {
            config: Arc::new(config),
            client,
            embedder,
            store,
        })
    }

    /// Crawls each seed breadth-first up to `max_depth` (inclusive).
    ///
    /// Seeds are processed sequentially and share one visited set, so a URL
    /// reachable from two seeds is fetched only once per run. Each seed's
    /// writes go to the collection named after the seed's host.
    pub async fn crawl(&self, seeds: &[String], max_depth: u32) -> Result<CrawlSummary, SageError> {
        let mut frontier = Frontier::new();
        let mut pages_processed = 0usize;
        let mut pages_indexed = 0usize;
        let delay = Duration::from_millis(self.config.crawler.request_delay_ms);

        for seed in seeds {
            let seed_url = validate_seed(seed.trim())?;

            // Scope is the seed after URL normalization, so its host casing
            // matches the normalized candidates produced by link resolution.
            // Discovered links must start with it to be crawled.
            let scope = seed_url.to_string();
            let scope = scope.as_str();
            let collection = collection_name(scope)?;

            // An unreachable index store at startup is the one fatal error
            // class; everything later is per-page.
            self.store
                .lock()
                .unwrap()
                .ensure_collection(&collection, self.embedder.dimension())?;

            tracing::info!("Seeding crawl of {} into collection {}", scope, collection);
            frontier.enqueue(CrawlTask::new(scope, 0));

            while let Some(task) = frontier.dequeue() {
                // Re-check at dequeue: duplicates queued before their first
                // processing, and over-depth tasks, are dropped silently
                // with no fetch and no pacing sleep.
                if frontier.is_visited(&task.url) || task.depth > max_depth {
                    tracing::debug!("Skipping {} (depth {})", task.url, task.depth);
                    continue;
                }

                frontier.mark_visited(&task.url);
                tracing::info!("Crawling {} (depth {})", task.url, task.depth);

                if self
                    .process_page(&task, scope, &collection, &mut frontier)
                    .await
                {
                    pages_indexed += 1;
                }
                pages_processed += 1;

                if pages_processed % 10 == 0 {
                    tracing::info!(
                        "Progress: {} pages processed, {} indexed, {} queued",
                        pages_processed,
                        pages_indexed,
                        frontier.queue_len()
                    );
                }

                // Pacing applies per processed URL, success or failure.
                tokio::time::sleep(delay).await;
            }
        }

        let summary = CrawlSummary {
            urls_visited: frontier.visited_count(),
            pages_indexed,
        };
        tracing::info!(
            "Crawl complete: {} unique URLs visited, {} pages indexed",
            summary.urls_visited,
            summary.pages_indexed
        );
        Ok(summary)
    }

    /// Fetches, embeds, stores, and expands one page.
    ///
    /// Returns true when the page's record made it into the index. All
    /// failures are logged and swallowed; the crawl keeps its forward
    /// progress.
    async fn process_page(
        &self,
        task: &CrawlTask,
        scope: &str,
        collection: &str,
        frontier: &mut Frontier,
    ) -> bool {
        let body = match fetch_url(&self.client, &task.url).await {
            FetchOutcome::Success { body, .. } => body,
            FetchOutcome::HttpError { status } => {
                tracing::warn!("Request failed for {}: HTTP {}", task.url, status);
                return false;
            }
            FetchOutcome::NetworkError { kind, error } => {
                tracing::warn!("Request failed for {}: {:?}: {}", task.url, kind, error);
                return false;
            }
        };

        let page = extract_page(&body);
        tracing::debug!(
            "Extracted {} bytes of paragraph text and {} links from {}",
            page.text.len(),
            page.links.len(),
            task.url
        );

        let indexed = self.embed_and_store(&task.url, &page.text, collection).await;

        self.enqueue_links(task, scope, &page.links, frontier);

        indexed
    }

    /// Embeds page text and upserts the record, keyed by the stable URL hash.
    ///
    /// Embedding or store failures are per-page: logged, skipped, non-fatal.
    async fn embed_and_store(&self, url: &str, text: &str, collection: &str) -> bool {
        let embedding = match self.embedder.embed(text).await {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("Embedding failed for {}: {}", url, e);
                return false;
            }
        };

        let doc_id = document_id(url);
        let result = self
            .store
            .lock()
            .unwrap()
            .upsert(collection, &doc_id, &embedding, text, url);

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Store failed for {}: {}", url, e);
                false
            }
        }
    }

    /// Resolves discovered hrefs and enqueues the eligible ones at depth+1
    fn enqueue_links(
        &self,
        task: &CrawlTask,
        scope: &str,
        hrefs: &[String],
        frontier: &mut Frontier,
    ) {
        let base = match Url::parse(&task.url) {
            Ok(u) => u,
            Err(_) => return,
        };

        let policy = ExtensionPolicy::new(
            &self.config.crawler.denied_extensions,
            self.config.crawler.case_sensitive_extensions,
        );

        for href in hrefs {
            let resolved = match resolve(&base, href) {
                Some(u) => u.to_string(),
                None => continue,
            };

            if is_eligible(&resolved, scope, &policy) && !frontier.is_visited(&resolved) {
                frontier.enqueue(CrawlTask::new(resolved, task.depth + 1));
            }
        }
    }
}

fn validate_seed(seed: &str) -> Result<Url, UrlError> {
    let url = Url::parse(seed).map_err(|e| UrlError::Parse(format!("{}: {}", seed, e)))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(seed.to_string()));
    }
    Ok(url)
}
