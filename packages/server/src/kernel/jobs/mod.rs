//! Job infrastructure for background crawl execution.
//!
//! This module provides the kernel-level infrastructure for crawl jobs:
//! - [`JobRegistry`] - In-memory job id -> status map
//! - [`JobRunner`] - Spawns detached crawl tasks and records their outcome
//! - [`JobStatus`] - The four-state lifecycle
//!
//! # Architecture
//!
//! ```text
//! POST /crawl
//!     │
//!     ├─► JobRegistry.create(id, pending)
//!     └─► JobRunner.dispatch(task)   (not awaited)
//!             │
//!             ├─► JobRegistry.set(id, running)
//!             ├─► BaseCrawler.crawl(task)
//!             └─► JobRegistry.set(id, completed | failed)
//!
//! GET /crawl/:id ─► JobRegistry.get(id)
//! ```
//!
//! Domain rules (which spiders exist, how ids look) live in
//! `domains::crawling`. This module only provides the infrastructure.

mod job;
mod registry;
mod runner;

pub use job::JobStatus;
pub use registry::{JobRegistry, JobRegistryError, JobSnapshot, SharedJobRegistry};
pub use runner::JobRunner;
