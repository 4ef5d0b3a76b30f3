use crate::handlers::{pretty_json_response, render_quote_page};
use crate::state::FormatQuery;
use axum::{
    extract::Query,
    response::{IntoResponse, Response},
};
use repo_core::ResponseFormat;
use serde_json::json;

const QUOTE: &str = "The best life is the one in which the creative impulses play the largest part and the possessive impulses the smallest.";
const AUTHOR: &str = "Bertrand Russell";

pub async fn info(Query(params): Query<FormatQuery>) -> Response {
    tracing::debug!("Received info request (format={:?})", params.format);

    match ResponseFormat::from_str(&params.format) {
        ResponseFormat::Json => pretty_json_response(&json!({
            "author": AUTHOR,
            "quote": QUOTE,
        })),
        ResponseFormat::Default => render_quote_page("Info", QUOTE, AUTHOR).into_response(),
    }
}
