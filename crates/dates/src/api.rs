use crate::error::AggregateError;
use repo_core::{SearchResponse, SearchResult};
use reqwest::Client;

/// Upstream error pages can be whole HTML documents; only this much is kept.
pub const MAX_ERROR_BODY_CHARS: usize = 200;

#[async_trait::async_trait]
pub trait RecordFetcher: Send + Sync {
    async fn search(&self, query: &str, rows: u64) -> Result<SearchResponse, AggregateError>;
}

pub struct RepositoryFetcher {
    client: Client,
    search_url: String,
}

impl RepositoryFetcher {
    pub fn new(client: Client, search_url: impl Into<String>) -> Self {
        Self {
            client,
            search_url: search_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl RecordFetcher for RepositoryFetcher {
    async fn search(&self, query: &str, rows: u64) -> Result<SearchResponse, AggregateError> {
        let q = primary_title_query(query);
        tracing::debug!("Searching {} (q={}, rows={})", self.search_url, q, rows);

        let res = self
            .client
            .get(&self.search_url)
            .query(&[("rows", rows.to_string()), ("q", q)])
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let body = truncate_error_body(res.text().await.unwrap_or_default());
            return Err(AggregateError::Status { status, body });
        }

        let body = res.text().await?;
        decode_search_response(&body)
    }
}

pub fn primary_title_query(query: &str) -> String {
    format!("primary_title:{}", query)
}

/// Cuts `body` to [`MAX_ERROR_BODY_CHARS`] chars, marking the cut with `...`.
pub fn truncate_error_body(body: String) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body,
    }
}

pub fn decode_search_response(body: &str) -> Result<SearchResponse, AggregateError> {
    let result: SearchResult =
        serde_json::from_str(body).map_err(AggregateError::MalformedUpstreamResponse)?;
    Ok(result.response)
}
