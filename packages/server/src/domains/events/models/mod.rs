pub mod event;
pub mod filter;

pub use event::EventOut;
pub use filter::{field_text, title_pattern, EventFilter};
