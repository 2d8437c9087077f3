//! Server dependencies shared by request handlers (using traits for testability)
//!
//! This module provides the central dependency container. External services
//! (crawler engine, event store) sit behind trait objects so tests can swap
//! them for in-process implementations.

use std::sync::Arc;

use super::jobs::{JobRegistry, JobRunner, SharedJobRegistry};
use super::{BaseCrawler, BaseEventStore};

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to handlers and background jobs
#[derive(Clone)]
pub struct ServerDeps {
    pub job_registry: SharedJobRegistry,
    pub job_runner: JobRunner,
    pub event_store: Arc<dyn BaseEventStore>,
}

impl ServerDeps {
    /// Build dependencies with a fresh, empty job registry.
    pub fn new(event_store: Arc<dyn BaseEventStore>, crawler: Arc<dyn BaseCrawler>) -> Self {
        let job_registry = Arc::new(JobRegistry::new());
        let job_runner = JobRunner::new(job_registry.clone(), crawler);

        Self {
            job_registry,
            job_runner,
            event_store,
        }
    }
}
