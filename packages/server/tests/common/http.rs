//! HTTP client for integration testing.
//!
//! Sends requests straight into the axum router without binding a socket.

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

/// Client that drives a router in-process.
pub struct ApiClient {
    app: Router,
}

/// Response captured from the router.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl ApiResponse {
    /// Header value as a string, panicking if absent.
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .unwrap_or_else(|| panic!("missing header {}", name))
            .to_str()
            .expect("header is not valid UTF-8")
    }

    /// The `detail` message of an error body.
    pub fn detail(&self) -> &str {
        self.body["detail"].as_str().unwrap_or_default()
    }
}

impl ApiClient {
    pub fn new(app: Router) -> Self {
        Self { app }
    }

    pub async fn get(&self, uri: &str) -> ApiResponse {
        self.send(Method::GET, uri, Body::empty()).await
    }

    pub async fn delete(&self, uri: &str) -> ApiResponse {
        self.send(Method::DELETE, uri, Body::empty()).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> ApiResponse {
        self.send(Method::POST, uri, Body::from(body.to_string())).await
    }

    pub async fn post_raw(&self, uri: &str, body: &'static str) -> ApiResponse {
        self.send(Method::POST, uri, Body::from(body)).await
    }

    async fn send(&self, method: Method, uri: &str, body: Body) -> ApiResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .expect("Failed to build request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        ApiResponse {
            status,
            headers,
            body,
        }
    }
}
