//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod event_store;
pub mod jobs;
pub mod simulated_crawler;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use event_store::PostgresEventStore;
pub use simulated_crawler::SimulatedCrawler;
pub use test_dependencies::{FailingCrawler, GatedCrawler, InMemoryEventStore, PanickingCrawler};
pub use traits::*;
