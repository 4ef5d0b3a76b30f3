use crate::error::AppError;
use crate::handlers::empty_response;
use crate::state::{AggregateQuery, SharedState};
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use repo_core::{Outcome, ResponseFormat, YearCounts};

pub async fn datecount(
    State(state): State<SharedState>,
    Query(params): Query<AggregateQuery>,
) -> Result<Response, AppError> {
    tracing::info!(
        "Received datecount request: query={:?} rows={:?} format={:?}",
        params.query,
        params.rows,
        params.format
    );

    let rows = repo_core::parse_rows(params.rows.as_deref())?;
    let format = ResponseFormat::from_str(&params.format);
    tracing::debug!("Resolved datecount request: rows={:?} format={}", rows, format.as_str());

    let response = match state.aggregator.year_counts(&params.query, rows).await? {
        Outcome::Empty(empty) => empty_response(&empty, format),
        Outcome::Found(counts) => match format {
            ResponseFormat::Json => Json(counts).into_response(),
            ResponseFormat::Default => (
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                render_year_counts(&counts),
            )
                .into_response(),
        },
    };
    Ok(response)
}

/// JSON-like object with one `"year":count` entry per line, e.g. `{"2001":2\n"2002":1}`.
pub fn render_year_counts(counts: &YearCounts) -> String {
    let entries: Vec<String> = counts
        .years
        .iter()
        .map(|(year, count)| format!("{}:{}", serde_json::Value::from(year.as_str()), count))
        .collect();
    format!("{{{}}}", entries.join("\n"))
}
