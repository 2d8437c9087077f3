// TestDependencies - in-process implementations for testing
//
// Provides crawlers and an event store that can be injected into ServerDeps
// for tests without a database or a spider engine.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use regex::RegexBuilder;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use tokio::sync::Notify;

use super::{BaseCrawler, BaseEventStore, CrawlTask};
use crate::domains::events::{field_text, EventFilter};

// =============================================================================
// Crawlers
// =============================================================================

/// Crawler that always returns an error.
pub struct FailingCrawler {
    message: String,
}

impl FailingCrawler {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl BaseCrawler for FailingCrawler {
    async fn crawl(&self, _task: &CrawlTask) -> Result<()> {
        Err(anyhow!("{}", self.message))
    }
}

/// Crawler that panics mid-crawl.
pub struct PanickingCrawler;

#[async_trait]
impl BaseCrawler for PanickingCrawler {
    async fn crawl(&self, task: &CrawlTask) -> Result<()> {
        panic!("spider {} blew up", task.spider);
    }
}

/// Crawler that blocks until released, so tests can observe the `running` state.
pub struct GatedCrawler {
    started: Notify,
    gate: Notify,
    calls: AtomicUsize,
}

impl GatedCrawler {
    pub fn new() -> Self {
        Self {
            started: Notify::new(),
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Wait until a crawl has entered the crawler.
    pub async fn wait_until_started(&self) {
        self.started.notified().await;
    }

    /// Let one blocked crawl finish successfully.
    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for GatedCrawler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseCrawler for GatedCrawler {
    async fn crawl(&self, _task: &CrawlTask) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.started.notify_one();
        self.gate.notified().await;
        Ok(())
    }
}

// =============================================================================
// In-memory Event Store
// =============================================================================

/// Event store backed by a vector of JSON documents, kept in insertion order.
///
/// Fields are compared as text like the Postgres store, so a numeric `city`
/// or `api_id` matches its decimal form.
#[derive(Default)]
pub struct InMemoryEventStore {
    documents: RwLock<Vec<Value>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(documents: impl IntoIterator<Item = Value>) -> Self {
        Self {
            documents: RwLock::new(documents.into_iter().collect()),
        }
    }

    pub fn insert(&self, document: Value) {
        self.documents
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(document);
    }

    fn matching(&self, filter: &EventFilter) -> Vec<Value> {
        self.documents
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|doc| filter.matches(doc))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl BaseEventStore for InMemoryEventStore {
    async fn count(&self, filter: &EventFilter) -> Result<u64> {
        Ok(self.matching(filter).len() as u64)
    }

    async fn find(&self, filter: &EventFilter, skip: u64, limit: u64) -> Result<Vec<Value>> {
        Ok(self
            .matching(filter)
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn find_by_api_id(&self, api_id: &str) -> Result<Option<Value>> {
        Ok(self
            .documents
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|doc| field_text(doc, "api_id").as_deref() == Some(api_id))
            .cloned())
    }

    async fn find_by_title_pattern(&self, pattern: &str) -> Result<Option<Value>> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .context("Invalid title pattern")?;

        Ok(self
            .documents
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|doc| {
                field_text(doc, "title").is_some_and(|title| regex.is_match(&title))
            })
            .cloned())
    }
}
