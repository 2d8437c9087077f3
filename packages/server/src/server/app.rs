//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    crawl_status_handler, get_event_handler, health_handler, list_crawl_jobs_handler,
    list_events_handler, remove_crawl_job_handler, root_handler, sources_handler,
    submit_crawl_handler, X_HAS_MORE, X_LIMIT, X_SKIP, X_TOTAL_COUNT,
};

/// Upper bound on request handling. Crawls run detached and are not affected.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub server_deps: Arc<ServerDeps>,
}

/// Build the Axum application router
///
/// `allowed_origins` restricts CORS; an empty list allows any origin.
pub fn build_app(server_deps: Arc<ServerDeps>, allowed_origins: &[String]) -> Router {
    let app_state = AxumAppState { server_deps };

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .expose_headers([X_TOTAL_COUNT, X_LIMIT, X_SKIP, X_HAS_MORE]);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/sources", get(sources_handler))
        // Crawl jobs
        .route(
            "/crawl",
            get(list_crawl_jobs_handler).post(submit_crawl_handler),
        )
        .route(
            "/crawl/:job_id",
            get(crawl_status_handler).delete(remove_crawl_job_handler),
        )
        // Events
        .route("/events", get(list_events_handler))
        .route("/events/:api_id", get(get_event_handler))
        // ServiceBuilder layers run top to bottom
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
                .layer(cors)
                .layer(Extension(app_state)),
        )
}
