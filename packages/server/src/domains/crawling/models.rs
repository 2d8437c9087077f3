//! Request and response shapes for the crawl control surface.

use serde::{Deserialize, Serialize};

use super::Spider;
use crate::kernel::jobs::JobStatus;

fn default_spider() -> String {
    Spider::default().name().to_string()
}

/// Body of `POST /crawl`. Every field is optional.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CrawlRequest {
    /// URLs to crawl. If absent, the spider uses its default start URLs.
    #[serde(default)]
    pub urls: Option<Vec<String>>,
    /// Name of the spider to use for crawling
    #[serde(default = "default_spider")]
    pub spider: String,
}

impl Default for CrawlRequest {
    fn default() -> Self {
        Self {
            urls: None,
            spider: default_spider(),
        }
    }
}

impl CrawlRequest {
    pub fn for_spider(spider: impl Into<String>) -> Self {
        Self {
            spider: spider.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrawlResponse {
    pub job_id: String,
    pub status: JobStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemovedJob {
    pub message: String,
    pub job_id: String,
}
