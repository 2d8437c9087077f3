// Common types and utilities shared across the application

pub mod pagination;

pub use pagination::{PageInfo, PageRequest, PaginationError, DEFAULT_LIMIT, MAX_LIMIT};
