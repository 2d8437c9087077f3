use axum::Json;
use serde::Serialize;

use crate::domains::crawling::Spider;

#[derive(Serialize)]
pub struct SourceInfo {
    name: &'static str,
    status: &'static str,
    last_crawled: Option<String>,
}

#[derive(Serialize)]
pub struct SourcesResponse {
    sources: Vec<SourceInfo>,
    total: usize,
}

/// Known event sources. Crawl history is not tracked, so `last_crawled`
/// is always null.
pub async fn sources_handler() -> Json<SourcesResponse> {
    let mut names: Vec<&'static str> = Spider::ALL.iter().map(Spider::name).collect();
    names.sort_unstable();

    let sources: Vec<SourceInfo> = names
        .into_iter()
        .map(|name| SourceInfo {
            name,
            status: "active",
            last_crawled: None,
        })
        .collect();

    Json(SourcesResponse {
        total: sources.len(),
        sources,
    })
}
