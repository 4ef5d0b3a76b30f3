use crate::config::AppConfig;
use dates::api::RepositoryFetcher;
use dates::DateAggregator;
use serde::Deserialize;
use std::sync::Arc;

/// Parameters shared by `/daterange/` and `/datecount/`
#[derive(Debug, Deserialize)]
pub struct AggregateQuery {
    #[serde(default)]
    pub query: String,
    pub rows: Option<String>,
    #[serde(default)]
    pub format: String,
}

#[derive(Debug, Deserialize)]
pub struct FormatQuery {
    #[serde(default)]
    pub format: String,
}

pub type SharedState = AppState;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub aggregator: Arc<DateAggregator<RepositoryFetcher>>,
}

impl AppState {
    pub fn new(config: AppConfig, http_client: reqwest::Client) -> Self {
        let aggregator = DateAggregator::with_client(http_client, &config.aggregator_config());
        Self {
            config,
            aggregator: Arc::new(aggregator),
        }
    }
}
