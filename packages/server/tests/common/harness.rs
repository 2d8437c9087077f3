//! Test harness for integration testing.
//!
//! Each test gets a fresh router with its own job registry and an in-memory
//! event store. The default crawler is the simulated one with millisecond
//! delays so lifecycle tests finish quickly.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use showup_core::kernel::jobs::JobStatus;
use showup_core::kernel::{BaseCrawler, InMemoryEventStore, ServerDeps, SimulatedCrawler};
use showup_core::server::build_app;
use test_context::AsyncTestContext;

use super::ApiClient;

/// Test harness that manages test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &mut TestHarness) {
///     let response = ctx.api().get("/health").await;
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    pub deps: Arc<ServerDeps>,
    /// Event documents visible to the API - use this for fixtures.
    pub events: Arc<InMemoryEventStore>,
    api: ApiClient,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        // Respect RUST_LOG; try_init so repeated setups don't panic.
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self::new()
    }
}

impl TestHarness {
    /// Harness with a fast simulated crawler.
    pub fn new() -> Self {
        Self::with_crawler(Arc::new(SimulatedCrawler::new(
            Duration::from_millis(10),
            Duration::from_millis(20),
        )))
    }

    /// Harness with a specific crawler implementation.
    pub fn with_crawler(crawler: Arc<dyn BaseCrawler>) -> Self {
        let events = Arc::new(InMemoryEventStore::new());
        let deps = Arc::new(ServerDeps::new(events.clone(), crawler));
        let api = ApiClient::new(build_app(deps.clone(), &[]));

        Self { deps, events, api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Insert event documents into the store.
    pub fn seed_events(&self, documents: impl IntoIterator<Item = Value>) {
        for document in documents {
            self.events.insert(document);
        }
    }

    /// Poll a job over HTTP until it reaches a terminal status.
    ///
    /// Returns every distinct status observed, in order.
    pub async fn wait_for_terminal(&self, job_id: &str) -> Vec<JobStatus> {
        let mut seen: Vec<JobStatus> = Vec::new();

        for _ in 0..400 {
            let response = self.api.get(&format!("/crawl/{}", job_id)).await;
            let status: JobStatus = serde_json::from_value(response.body["status"].clone())
                .unwrap_or_else(|_| panic!("unexpected status body: {:?}", response.body));

            if seen.last() != Some(&status) {
                seen.push(status);
            }
            if status.is_terminal() {
                return seen;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        panic!("job {} never finished; saw {:?}", job_id, seen);
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
