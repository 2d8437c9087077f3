//! Detached execution of crawl jobs.
//!
//! The `JobRunner` takes a registered job and drives it through its
//! lifecycle on a spawned task:
//!
//! ```text
//! dispatch(task)            (returns immediately)
//!     │
//!     └─► tokio::spawn
//!             ├─► registry: pending -> running
//!             ├─► BaseCrawler::crawl (errors and panics caught)
//!             └─► registry: running -> completed | failed
//! ```
//!
//! Nothing escapes the spawned task. If the job is deleted while it runs,
//! the final write is rejected by the registry and the outcome is only logged.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, info_span, warn, Instrument};

use super::registry::{JobRegistryError, SharedJobRegistry};
use super::JobStatus;
use crate::kernel::{BaseCrawler, CrawlTask};

/// Runs crawl jobs in the background and records their outcome.
#[derive(Clone)]
pub struct JobRunner {
    registry: SharedJobRegistry,
    crawler: Arc<dyn BaseCrawler>,
}

impl JobRunner {
    pub fn new(registry: SharedJobRegistry, crawler: Arc<dyn BaseCrawler>) -> Self {
        Self { registry, crawler }
    }

    /// Spawn the job and return without waiting for it.
    ///
    /// The handle is only useful to tests; callers on the request path drop it.
    pub fn dispatch(&self, task: CrawlTask) -> JoinHandle<JobStatus> {
        let runner = self.clone();
        let span = info_span!("crawl_job", job_id = %task.job_id, spider = %task.spider);

        tokio::spawn(async move { runner.execute(task).await }.instrument(span))
    }

    /// Drive one job to a terminal status.
    ///
    /// Returns the status the job ended in, or `Failed` when the job vanished
    /// from the registry before it could be recorded.
    pub async fn execute(&self, task: CrawlTask) -> JobStatus {
        if let Err(e) = self.registry.set(&task.job_id, JobStatus::Running) {
            warn!(error = %e, "crawl job could not start");
            return JobStatus::Failed;
        }
        debug!("crawl job running");

        let outcome = AssertUnwindSafe(self.crawler.crawl(&task))
            .catch_unwind()
            .await;

        let status = match outcome {
            Ok(Ok(())) => {
                info!("crawl job completed");
                JobStatus::Completed
            }
            Ok(Err(e)) => {
                warn!(error = %e, "crawl job failed");
                JobStatus::Failed
            }
            Err(panic) => {
                error!(panic = %panic_message(panic.as_ref()), "crawl job panicked");
                JobStatus::Failed
            }
        };

        match self.registry.set(&task.job_id, status) {
            Ok(()) => status,
            Err(JobRegistryError::NotFound(_)) => {
                debug!(outcome = %status, "crawl job was removed while running");
                status
            }
            Err(e) => {
                error!(error = %e, "failed to record crawl job outcome");
                JobStatus::Failed
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
