use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "show-up-api";

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

#[derive(Serialize)]
pub struct ApiInfo {
    name: &'static str,
    description: &'static str,
    version: &'static str,
}

/// Health check endpoint
///
/// Liveness only: the job registry is in-process and the event store is
/// checked lazily by the requests that use it.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

/// Basic API information
pub async fn root_handler() -> Json<ApiInfo> {
    Json(ApiInfo {
        name: "Show Up API",
        description: "Event crawler and data API",
        version: env!("CARGO_PKG_VERSION"),
    })
}
