use crate::error::AppError;
use crate::handlers::{empty_response, render_quote_page};
use crate::state::{AggregateQuery, SharedState};
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    Json,
};
use repo_core::{DateRange, Outcome, ResponseFormat};

pub async fn daterange(
    State(state): State<SharedState>,
    Query(params): Query<AggregateQuery>,
) -> Result<Response, AppError> {
    tracing::info!(
        "Received daterange request: query={:?} rows={:?} format={:?}",
        params.query,
        params.rows,
        params.format
    );

    let rows = repo_core::parse_rows(params.rows.as_deref())?;
    let format = ResponseFormat::from_str(&params.format);
    tracing::debug!("Resolved daterange request: rows={:?} format={}", rows, format.as_str());

    let response = match state.aggregator.date_range(&params.query, rows).await? {
        Outcome::Empty(empty) => empty_response(&empty, format),
        Outcome::Found(range) => match format {
            ResponseFormat::Json => Json(range).into_response(),
            ResponseFormat::Default => render_date_range(&range).into_response(),
        },
    };
    Ok(response)
}

/// Rows used versus total matches is shown so the caller can raise `rows` for a tighter range.
pub fn render_date_range(range: &DateRange) -> Html<String> {
    render_quote_page(
        "Date range",
        &format!("Dates range from {} to {}", range.min_date, range.max_date),
        &format!(
            "Based off of {} results out of a total of {}",
            range.rows_returned, range.num_found
        ),
    )
}
