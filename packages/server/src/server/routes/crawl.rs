//! Crawl job endpoints.
//!
//! POST   /crawl           - submit a crawl job (returns immediately)
//! GET    /crawl           - all jobs with a per-status summary
//! GET    /crawl/:job_id   - status of one job
//! DELETE /crawl/:job_id   - forget a job

use axum::{
    body::Bytes,
    extract::{Extension, Path},
    Json,
};
use serde_json::Value;

use crate::domains::crawling::{self, CrawlRequest, CrawlResponse, RemovedJob};
use crate::kernel::jobs::JobSnapshot;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

/// Submit a crawl. An empty body means "default spider, default URLs".
pub async fn submit_crawl_handler(
    Extension(state): Extension<AxumAppState>,
    body: Bytes,
) -> Result<Json<CrawlResponse>, ApiError> {
    let request = parse_crawl_request(&body)?;
    let response = crawling::submit_crawl(request, &state.server_deps)?;
    Ok(Json(response))
}

pub async fn crawl_status_handler(
    Extension(state): Extension<AxumAppState>,
    Path(job_id): Path<String>,
) -> Result<Json<CrawlResponse>, ApiError> {
    Ok(Json(crawling::get_crawl_status(&job_id, &state.server_deps)?))
}

pub async fn list_crawl_jobs_handler(
    Extension(state): Extension<AxumAppState>,
) -> Json<JobSnapshot> {
    Json(crawling::list_crawl_jobs(&state.server_deps))
}

pub async fn remove_crawl_job_handler(
    Extension(state): Extension<AxumAppState>,
    Path(job_id): Path<String>,
) -> Result<Json<RemovedJob>, ApiError> {
    Ok(Json(crawling::remove_crawl_job(&job_id, &state.server_deps)?))
}

fn parse_crawl_request(body: &[u8]) -> Result<CrawlRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CrawlRequest::default());
    }

    let invalid =
        |e: serde_json::Error| ApiError::Unprocessable(format!("Invalid crawl request: {}", e));

    match serde_json::from_slice::<Value>(body).map_err(invalid)? {
        Value::Null => Ok(CrawlRequest::default()),
        value @ Value::Object(_) => serde_json::from_value(value).map_err(invalid),
        _ => Err(ApiError::Unprocessable(
            "Invalid crawl request: expected a JSON object".to_string(),
        )),
    }
}
