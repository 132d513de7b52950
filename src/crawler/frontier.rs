//! FIFO crawl frontier with visited-set deduplication
//!
//! The frontier owns the queue of not-yet-fetched (url, depth) pairs plus
//! the visited set guaranteeing each URL is fetched at most once per crawl
//! run. URLs are marked visited at dequeue time, not at enqueue time, so a
//! URL discovered several times before being processed still triggers one
//! fetch; the duplicate queue entries fall out of the visited re-check.

use std::collections::{HashSet, VecDeque};

/// A unit of crawl work: a URL and the depth it was discovered at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTask {
    pub url: String,
    pub depth: u32,
}

impl CrawlTask {
    pub fn new(url: impl Into<String>, depth: u32) -> Self {
        Self {
            url: url.into(),
            depth,
        }
    }
}

/// FIFO work queue plus visited set, scoped to one crawl run
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<CrawlTask>,
    visited: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task unless its URL was already visited.
    ///
    /// The queue itself is not deduplicated; the same URL may sit in the
    /// queue more than once and is skipped when dequeued the second time.
    pub fn enqueue(&mut self, task: CrawlTask) {
        if !self.visited.contains(&task.url) {
            self.queue.push_back(task);
        }
    }

    /// Pops the head of the queue, or None when the frontier is exhausted
    pub fn dequeue(&mut self) -> Option<CrawlTask> {
        self.queue.pop_front()
    }

    /// Adds a URL to the visited set; called once per URL, at dequeue time
    pub fn mark_visited(&mut self, url: &str) {
        self.visited.insert(url.to_string());
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Number of distinct URLs visited so far in this run
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::new();
        frontier.enqueue(CrawlTask::new("https://x.test/a", 0));
        frontier.enqueue(CrawlTask::new("https://x.test/b", 1));
        frontier.enqueue(CrawlTask::new("https://x.test/c", 1));

        assert_eq!(frontier.dequeue().unwrap().url, "https://x.test/a");
        assert_eq!(frontier.dequeue().unwrap().url, "https://x.test/b");
        assert_eq!(frontier.dequeue().unwrap().url, "https://x.test/c");
        assert!(frontier.dequeue().is_none());
    }

    #[test]
    fn test_enqueue_skips_visited() {
        let mut frontier = Frontier::new();
        frontier.mark_visited("https://x.test/a");
        frontier.enqueue(CrawlTask::new("https://x.test/a", 1));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_queue_allows_duplicates_until_visited() {
        let mut frontier = Frontier::new();
        frontier.enqueue(CrawlTask::new("https://x.test/a", 1));
        frontier.enqueue(CrawlTask::new("https://x.test/a", 2));
        assert_eq!(frontier.queue_len(), 2);

        // First dequeue is processed and marked; the second entry survives
        // in the queue and is the caller's job to skip via is_visited.
        let first = frontier.dequeue().unwrap();
        frontier.mark_visited(&first.url);

        let second = frontier.dequeue().unwrap();
        assert!(frontier.is_visited(&second.url));
    }

    #[test]
    fn test_visited_is_not_marked_at_enqueue() {
        let mut frontier = Frontier::new();
        frontier.enqueue(CrawlTask::new("https://x.test/a", 0));
        assert!(!frontier.is_visited("https://x.test/a"));
    }

    #[test]
    fn test_visited_count() {
        let mut frontier = Frontier::new();
        frontier.mark_visited("https://x.test/a");
        frontier.mark_visited("https://x.test/b");
        frontier.mark_visited("https://x.test/a");
        assert_eq!(frontier.visited_count(), 2);
    }
}
