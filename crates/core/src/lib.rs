use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_ROWS: u64 = 100;

/// Search API response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub response: SearchResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "numFound")]
    pub num_found: u64,
    pub docs: Vec<Record>,
}

/// A single repository record. Only the date field is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub date_dsi: String,
}

impl Record {
    pub fn new(date_dsi: impl Into<String>) -> Self {
        Self {
            date_dsi: date_dsi.into(),
        }
    }
}

/// Earliest and latest record dates for a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub min_date: String,
    pub max_date: String,
    pub rows_returned: usize,
    pub num_found: u64,
}

/// Record counts keyed by year, ascending
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearCounts {
    pub rows_returned: usize,
    pub num_found: u64,
    pub years: BTreeMap<String, u64>,
}

impl YearCounts {
    pub fn total(&self) -> u64 {
        self.years.values().sum()
    }
}

/// Why an aggregation produced nothing to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyResult {
    MissingQuery,
    NoRecords { query: String },
}

impl EmptyResult {
    pub fn for_query(query: &str) -> Self {
        if query.is_empty() {
            Self::MissingQuery
        } else {
            Self::NoRecords {
                query: query.to_string(),
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::MissingQuery => {
                "Please supply a query (add ?query=[SEARCH STRING] to the url)".to_string()
            }
            Self::NoRecords { query } => format!("No records found with query {}", query),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Found(T),
    Empty(EmptyResult),
}

/// Output format requested through the `format` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Default,
    Json,
}

impl ResponseFormat {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("rows must be a positive integer, got {0:?}")]
pub struct InvalidRows(pub String);

/// Parses the optional `rows` parameter. Missing or blank means "use the default".
pub fn parse_rows(raw: Option<&str>) -> Result<Option<u64>, InvalidRows> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(v) => v,
    };

    match raw.parse::<u64>() {
        Ok(0) | Err(_) => Err(InvalidRows(raw.to_string())),
        Ok(n) => Ok(Some(n)),
    }
}
