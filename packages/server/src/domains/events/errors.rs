use thiserror::Error;

use crate::common::PaginationError;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Event not found")]
    NotFound,

    #[error("Error processing event data: {0}")]
    Mapping(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidPage(#[from] PaginationError),

    #[error("Event store error: {0}")]
    Store(#[from] anyhow::Error),
}
