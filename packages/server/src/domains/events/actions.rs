//! Event query operations.
//!
//! Unmappable documents are handled differently by the two operations:
//! `list_events` drops them from the page (the counts still include them),
//! while `get_event` reports them as an error.

use std::sync::Arc;

use tracing::{debug, warn};

use super::models::{title_pattern, EventFilter, EventOut};
use super::EventError;
use crate::common::{PageInfo, PageRequest};
use crate::kernel::BaseEventStore;

/// One page of events plus its position in the full result set.
#[derive(Debug, Clone)]
pub struct EventPage {
    pub events: Vec<EventOut>,
    pub page: PageInfo,
}

pub async fn list_events(
    filter: &EventFilter,
    page: PageRequest,
    store: &Arc<dyn BaseEventStore>,
) -> Result<EventPage, EventError> {
    let total_count = store.count(filter).await?;
    let documents = store.find(filter, page.skip, page.limit).await?;

    let fetched = documents.len();
    let events: Vec<EventOut> = documents
        .into_iter()
        .filter_map(|document| match EventOut::from_document(document) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!(error = %e, "skipping event that failed to map");
                None
            }
        })
        .collect();

    debug!(
        total_count,
        fetched,
        returned = events.len(),
        skip = page.skip,
        limit = page.limit,
        "listed events"
    );

    Ok(EventPage {
        events,
        page: page.info(total_count),
    })
}

/// Find an event by `api_id`, falling back to a title match for older
/// records that were stored without one.
pub async fn get_event(
    api_id: &str,
    store: &Arc<dyn BaseEventStore>,
) -> Result<EventOut, EventError> {
    let mut document = store.find_by_api_id(api_id).await?;

    if document.is_none() {
        let pattern = title_pattern(api_id);
        if !pattern.is_empty() {
            debug!(api_id = %api_id, pattern = %pattern, "api_id miss, trying title");
            document = store.find_by_title_pattern(&pattern).await?;
        }
    }

    let document = document.ok_or(EventError::NotFound)?;
    Ok(EventOut::from_document(document)?)
}
