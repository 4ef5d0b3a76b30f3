use dates::AggregatorConfig;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Process-level settings, read once at startup and passed into [`crate::state::AppState`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub search_api_url: String,
    pub default_rows: u64,
    /// `None` keeps upstream requests unbounded.
    pub request_timeout: Option<Duration>,
    pub port: u16,
    pub debug: bool,
    pub git_branch: String,
    pub git_commit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_api_url: dates::DEFAULT_SEARCH_URL.to_string(),
            default_rows: repo_core::DEFAULT_ROWS,
            request_timeout: None,
            port: 3000,
            debug: false,
            git_branch: "unknown".to_string(),
            git_commit: "unknown".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let default_rows = match parse_env::<u64>(&lookup, "DEFAULT_ROWS") {
            Some(0) => {
                tracing::warn!("DEFAULT_ROWS must be positive, using {}", defaults.default_rows);
                defaults.default_rows
            }
            Some(rows) => rows,
            None => defaults.default_rows,
        };

        Self {
            search_api_url: get_env_or_default(&lookup, "SEARCH_API_URL", &defaults.search_api_url),
            default_rows,
            request_timeout: parse_env::<u64>(&lookup, "REQUEST_TIMEOUT_SECS")
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            port: parse_env(&lookup, "PORT").unwrap_or(defaults.port),
            debug: parse_env::<bool>(&lookup, "DEBUG").unwrap_or(defaults.debug),
            git_branch: get_env_or_default(&lookup, "GIT_BRANCH", &defaults.git_branch),
            git_commit: get_env_or_default(&lookup, "GIT_COMMIT", &defaults.git_commit),
        }
    }

    pub fn aggregator_config(&self) -> AggregatorConfig {
        AggregatorConfig {
            search_url: self.search_api_url.clone(),
            default_rows: self.default_rows,
        }
    }

    pub fn build_http_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}

fn get_env_or_default(lookup: impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

/// Unset or unparsable values yield `None`; the latter is logged.
fn parse_env<T: FromStr>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid value for {}: {:?}", key, raw);
            None
        }
    }
}
