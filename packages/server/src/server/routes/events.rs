//! Event endpoints.
//!
//! GET /events            - filtered, paginated list (pagination in headers)
//! GET /events/:api_id    - one event by api_id or title

use axum::{
    extract::{rejection::QueryRejection, Extension, Path, Query},
    http::{HeaderMap, HeaderName, HeaderValue},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::PageRequest;
use crate::domains::events::{self, EventError, EventFilter, EventOut};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

pub const X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");
pub const X_LIMIT: HeaderName = HeaderName::from_static("x-limit");
pub const X_SKIP: HeaderName = HeaderName::from_static("x-skip");
pub const X_HAS_MORE: HeaderName = HeaderName::from_static("x-has-more");

#[derive(Debug, Default, Deserialize)]
pub struct EventListQuery {
    /// Maximum number of events to return (1-100)
    pub limit: Option<i64>,
    /// Number of events to skip
    pub skip: Option<i64>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub event_type: Option<String>,
    pub organizer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub events: Vec<EventOut>,
}

pub async fn list_events_handler(
    Extension(state): Extension<AxumAppState>,
    query: Result<Query<EventListQuery>, QueryRejection>,
) -> Result<(HeaderMap, Json<EventListResponse>), ApiError> {
    let Query(query) =
        query.map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))?;
    let page = PageRequest::new(query.limit, query.skip).map_err(EventError::from)?;
    let filter = EventFilter::from_params(
        query.city,
        query.country,
        query.event_type,
        query.organizer,
    );

    let result = events::list_events(&filter, page, &state.server_deps.event_store).await?;

    let mut headers = HeaderMap::new();
    headers.insert(X_TOTAL_COUNT, HeaderValue::from(result.page.total_count));
    headers.insert(X_LIMIT, HeaderValue::from(result.page.limit));
    headers.insert(X_SKIP, HeaderValue::from(result.page.skip));
    headers.insert(
        X_HAS_MORE,
        HeaderValue::from_static(if result.page.has_more { "true" } else { "false" }),
    );

    Ok((
        headers,
        Json(EventListResponse {
            events: result.events,
        }),
    ))
}

pub async fn get_event_handler(
    Extension(state): Extension<AxumAppState>,
    Path(api_id): Path<String>,
) -> Result<Json<EventOut>, ApiError> {
    Ok(Json(
        events::get_event(&api_id, &state.server_deps.event_store).await?,
    ))
}
