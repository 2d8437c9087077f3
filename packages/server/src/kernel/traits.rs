// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (filter building, projection, job lifecycle) lives in the domains.
//
// Naming convention: Base* for trait names (e.g., BaseCrawler, BaseEventStore)

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::domains::crawling::Spider;
use crate::domains::events::EventFilter;

// =============================================================================
// Crawler Trait (Infrastructure - spider execution engine)
// =============================================================================

/// One unit of crawl work handed to a crawler.
#[derive(Debug, Clone)]
pub struct CrawlTask {
    pub job_id: String,
    pub spider: Spider,
    /// Overrides the spider's default start URLs when present
    pub urls: Option<Vec<String>>,
}

impl CrawlTask {
    /// URLs the spider should start from.
    pub fn start_urls(&self) -> Vec<String> {
        match &self.urls {
            Some(urls) => urls.clone(),
            None => self
                .spider
                .default_start_urls()
                .iter()
                .map(|url| url.to_string())
                .collect(),
        }
    }
}

#[async_trait]
pub trait BaseCrawler: Send + Sync {
    /// Run a spider to completion.
    ///
    /// Returning `Ok` marks the job completed; an error marks it failed.
    async fn crawl(&self, task: &CrawlTask) -> Result<()>;
}

// =============================================================================
// Event Store Trait (Infrastructure - document storage)
// =============================================================================

/// Read access to stored event documents.
///
/// Documents are returned raw; projection onto the public event shape is the
/// events domain's job.
#[async_trait]
pub trait BaseEventStore: Send + Sync {
    /// Count every document matching the filter.
    async fn count(&self, filter: &EventFilter) -> Result<u64>;

    /// Matching documents in insertion order, after skipping `skip`, at most `limit`.
    async fn find(&self, filter: &EventFilter, skip: u64, limit: u64) -> Result<Vec<Value>>;

    /// First document whose `api_id` equals the given id.
    async fn find_by_api_id(&self, api_id: &str) -> Result<Option<Value>>;

    /// First document whose `title` matches the case-insensitive regex.
    async fn find_by_title_pattern(&self, pattern: &str) -> Result<Option<Value>>;
}
