//! Crawl control operations.
//!
//! These run on the request path and never wait for a crawl: `submit_crawl`
//! registers the job and hands it to the [`JobRunner`](crate::kernel::jobs::JobRunner)
//! before returning.

use tracing::info;

use super::job_id::generate_job_id;
use super::models::{CrawlRequest, CrawlResponse, RemovedJob};
use super::{CrawlError, Spider};
use crate::kernel::jobs::{JobSnapshot, JobStatus};
use crate::kernel::{CrawlTask, ServerDeps};

/// Validate the spider, register a pending job and start it in the background.
pub fn submit_crawl(request: CrawlRequest, deps: &ServerDeps) -> Result<CrawlResponse, CrawlError> {
    let spider: Spider = request.spider.parse()?;

    let job_id = generate_job_id(spider.name());
    deps.job_registry.create(job_id.clone(), JobStatus::Pending);

    info!(job_id = %job_id, spider = %spider, "crawl job submitted");

    // Detached: the handle is dropped and the response does not wait on it
    deps.job_runner.dispatch(CrawlTask {
        job_id: job_id.clone(),
        spider,
        urls: request.urls,
    });

    Ok(CrawlResponse {
        job_id,
        status: JobStatus::Pending,
    })
}

pub fn get_crawl_status(job_id: &str, deps: &ServerDeps) -> Result<CrawlResponse, CrawlError> {
    let status = deps
        .job_registry
        .get(job_id)
        .map_err(|_| CrawlError::JobNotFound(job_id.to_string()))?;
    Ok(CrawlResponse {
        job_id: job_id.to_string(),
        status,
    })
}

/// Every job with a per-status summary. Not paginated.
pub fn list_crawl_jobs(deps: &ServerDeps) -> JobSnapshot {
    deps.job_registry.list()
}

/// Remove a job record. A crawl that is still running keeps running; its
/// final status write is discarded.
pub fn remove_crawl_job(job_id: &str, deps: &ServerDeps) -> Result<RemovedJob, CrawlError> {
    let last_status = deps
        .job_registry
        .delete(job_id)
        .map_err(|_| CrawlError::JobNotFound(job_id.to_string()))?;

    info!(job_id = %job_id, last_status = %last_status, "crawl job removed");

    Ok(RemovedJob {
        message: format!("Job '{}' has been removed", job_id),
        job_id: job_id.to_string(),
    })
}
