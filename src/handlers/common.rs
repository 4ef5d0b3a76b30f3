use crate::error::AppError;
use axum::{
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use repo_core::{EmptyResult, ResponseFormat};
use serde_json::json;

pub async fn root() -> Redirect {
    Redirect::to("/info/")
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

/// Empty results are user-facing messages, not errors, so they go out as 200.
pub fn empty_response(empty: &EmptyResult, format: ResponseFormat) -> Response {
    match format {
        ResponseFormat::Json => Json(json!({ "message": empty.message() })).into_response(),
        ResponseFormat::Default => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            empty.message(),
        )
            .into_response(),
    }
}

pub fn pretty_json_response(value: &serde_json::Value) -> Response {
    let body = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    (
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        body,
    )
        .into_response()
}

/// Quote/author page used by `/info/` and `/daterange/`.
pub fn render_quote_page(title: &str, quote: &str, author: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
</head>
<body>
    <h1>{title}</h1>
    <blockquote>
        <p class="quote">{quote}</p>
        <footer class="author">{author}</footer>
    </blockquote>
</body>
</html>
"#,
        title = escape_html(title),
        quote = escape_html(quote),
        author = escape_html(author),
    ))
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
