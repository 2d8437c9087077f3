// Show Up API - Core
//
// This crate provides the backend API for requesting event crawls and
// reading the events they collected.
//
// - kernel: infrastructure (job registry and runner, crawler, event store)
// - domains: crawl job control and event queries
// - server: axum router, routes and error responses

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
