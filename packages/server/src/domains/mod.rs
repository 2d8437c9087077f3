// Domain modules
//
// Each domain owns its rules and request/response shapes. Shared
// infrastructure (job registry, stores, crawler) lives in `kernel`.

pub mod crawling;
pub mod events;
