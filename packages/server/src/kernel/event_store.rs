//! Postgres-backed event store.
//!
//! Events are stored as raw JSONB documents in the `events` table exactly as
//! the crawlers wrote them. This store only filters and pages; projection onto
//! the public event shape happens in the events domain.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::BaseEventStore;
use crate::domains::events::EventFilter;

pub struct PostgresEventStore {
    pool: PgPool,
}

impl PostgresEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a raw document. Used by importers and tests.
    pub async fn insert(&self, document: &Value) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("INSERT INTO events (document) VALUES ($1) RETURNING id")
            .bind(document)
            .fetch_one(&self.pool)
            .await
            .context("Failed to insert event document")
    }
}

/// Append `WHERE` clauses for the filter. Substring filters are literal and
/// case-insensitive; `event_type` is exact.
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &EventFilter) {
    builder.push(" WHERE TRUE");

    for (field, value) in [
        ("city", &filter.city),
        ("country", &filter.country),
        ("organizer", &filter.organizer),
    ] {
        if let Some(value) = value {
            builder
                .push(format!(" AND document->>'{}' ILIKE ", field))
                .push_bind(like_pattern(value));
        }
    }

    if let Some(event_type) = &filter.event_type {
        builder
            .push(" AND document->>'event_type' = ")
            .push_bind(event_type.clone());
    }
}

/// `%value%` with LIKE metacharacters escaped.
fn like_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('%');
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl BaseEventStore for PostgresEventStore {
    async fn count(&self, filter: &EventFilter) -> Result<u64> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM events");
        push_filter(&mut builder, filter);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .context("Failed to count events")?;

        Ok(count.max(0) as u64)
    }

    async fn find(&self, filter: &EventFilter, skip: u64, limit: u64) -> Result<Vec<Value>> {
        let mut builder = QueryBuilder::new("SELECT document FROM events");
        push_filter(&mut builder, filter);
        builder
            .push(" ORDER BY id OFFSET ")
            .push_bind(skip as i64)
            .push(" LIMIT ")
            .push_bind(limit as i64);

        builder
            .build_query_scalar::<Value>()
            .fetch_all(&self.pool)
            .await
            .context("Failed to query events")
    }

    async fn find_by_api_id(&self, api_id: &str) -> Result<Option<Value>> {
        sqlx::query_scalar::<_, Value>(
            "SELECT document FROM events
             WHERE document->>'api_id' = $1
             ORDER BY id
             LIMIT 1",
        )
        .bind(api_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to look up event by api_id")
    }

    async fn find_by_title_pattern(&self, pattern: &str) -> Result<Option<Value>> {
        sqlx::query_scalar::<_, Value>(
            "SELECT document FROM events
             WHERE document->>'title' ~* $1
             ORDER BY id
             LIMIT 1",
        )
        .bind(pattern)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to look up event by title")
    }
}
