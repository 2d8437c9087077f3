//! Crawling domain - crawl job submission and lifecycle queries
//!
//! # Components
//!
//! - `spider` - The allow-list of spiders (`luma`, `eventbrite`)
//! - `job_id` - Sortable, collision-resistant job identifiers
//! - `actions` - Submit, status, list and remove operations
//! - `models` - Request/response shapes
//!
//! Job state itself is owned by `kernel::jobs::JobRegistry`; execution is
//! handled by `kernel::jobs::JobRunner`.

pub mod actions;
mod errors;
pub mod job_id;
pub mod models;
mod spider;

pub use actions::{get_crawl_status, list_crawl_jobs, remove_crawl_job, submit_crawl};
pub use errors::CrawlError;
pub use models::{CrawlRequest, CrawlResponse, RemovedJob};
pub use spider::Spider;
