//! Events domain - read-only access to crawled event records
//!
//! # Components
//!
//! - `models/` - Public event projection (`EventOut`) and list filters
//! - `actions` - List with filters/pagination, lookup by api_id
//!
//! Storage is reached through `kernel::BaseEventStore`.

pub mod actions;
mod errors;
pub mod models;

pub use actions::{get_event, list_events, EventPage};
pub use errors::EventError;
pub use models::{field_text, title_pattern, EventFilter, EventOut};
