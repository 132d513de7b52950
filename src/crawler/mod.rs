//! Crawler module: fetching, extraction, frontier management, and the
//! orchestration loop that ties them to the embedder and index store.

mod coordinator;
mod extractor;
mod fetcher;
mod frontier;

pub use coordinator::{CrawlSummary, Crawler};
pub use extractor::{extract_page, ExtractedPage};
pub use fetcher::{build_http_client, fetch_url, FetchOutcome, NetworkErrorKind};
pub use frontier::{CrawlTask, Frontier};
