use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrawlError {
    #[error("Spider '{requested}' not found. Available: {available}")]
    InvalidSpider { requested: String, available: String },

    #[error("Job '{0}' not found")]
    JobNotFound(String),
}
