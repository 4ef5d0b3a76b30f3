pub mod api;
pub mod error;
pub mod logic;

use crate::api::{RecordFetcher, RepositoryFetcher};
use repo_core::{DateRange, EmptyResult, Outcome, SearchResponse, YearCounts};
use reqwest::Client;

pub use error::AggregateError;

pub const DEFAULT_SEARCH_URL: &str = "https://repository.library.brown.edu/api/search/";

/// Settings handed to the aggregator when it is built
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    pub search_url: String,
    pub default_rows: u64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            default_rows: repo_core::DEFAULT_ROWS,
        }
    }
}

pub struct DateAggregator<F> {
    fetcher: F,
    default_rows: u64,
}

impl DateAggregator<RepositoryFetcher> {
    pub fn with_client(client: Client, config: &AggregatorConfig) -> Self {
        Self::new(
            RepositoryFetcher::new(client, config.search_url.clone()),
            config.default_rows,
        )
    }
}

impl<F: RecordFetcher> DateAggregator<F> {
    pub fn new(fetcher: F, default_rows: u64) -> Self {
        Self {
            fetcher,
            default_rows,
        }
    }

    pub async fn date_range(
        &self,
        query: &str,
        rows: Option<u64>,
    ) -> Result<Outcome<DateRange>, AggregateError> {
        let response = match self.fetch(query, rows).await? {
            Outcome::Found(response) => response,
            Outcome::Empty(empty) => return Ok(Outcome::Empty(empty)),
        };

        match logic::date_range(&response.docs, response.num_found) {
            Some(range) => Ok(Outcome::Found(range)),
            None => Ok(Outcome::Empty(EmptyResult::for_query(query))),
        }
    }

    pub async fn year_counts(
        &self,
        query: &str,
        rows: Option<u64>,
    ) -> Result<Outcome<YearCounts>, AggregateError> {
        let response = match self.fetch(query, rows).await? {
            Outcome::Found(response) => response,
            Outcome::Empty(empty) => return Ok(Outcome::Empty(empty)),
        };

        Ok(Outcome::Found(logic::year_counts(
            &response.docs,
            response.num_found,
        )))
    }

    async fn fetch(
        &self,
        query: &str,
        rows: Option<u64>,
    ) -> Result<Outcome<SearchResponse>, AggregateError> {
        let rows = rows.unwrap_or(self.default_rows);
        let response = self.fetcher.search(query, rows).await?;
        tracing::debug!(
            "Search for {:?} returned {} of {} records",
            query,
            response.docs.len(),
            response.num_found
        );

        if response.docs.is_empty() {
            return Ok(Outcome::Empty(EmptyResult::for_query(query)));
        }
        Ok(Outcome::Found(response))
    }
}
