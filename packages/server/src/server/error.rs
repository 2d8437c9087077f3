//! HTTP error responses.
//!
//! Every error leaves the server as `{"detail": "<message>"}` with a status
//! code chosen by its kind.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domains::crawling::CrawlError;
use crate::domains::events::EventError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "request failed");
        }

        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<CrawlError> for ApiError {
    fn from(error: CrawlError) -> Self {
        match error {
            CrawlError::InvalidSpider { .. } => ApiError::BadRequest(error.to_string()),
            CrawlError::JobNotFound(_) => ApiError::NotFound(error.to_string()),
        }
    }
}

impl From<EventError> for ApiError {
    fn from(error: EventError) -> Self {
        match error {
            EventError::NotFound => ApiError::NotFound(error.to_string()),
            EventError::Mapping(_) => ApiError::Internal(error.to_string()),
            EventError::InvalidPage(_) => ApiError::Unprocessable(error.to_string()),
            EventError::Store(e) => {
                tracing::error!(error = ?e, "event store failure");
                ApiError::Internal("Internal server error".to_string())
            }
        }
    }
}
