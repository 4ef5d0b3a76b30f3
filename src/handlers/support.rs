use crate::error::AppError;
use crate::handlers::pretty_json_response;
use crate::state::SharedState;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use serde_json::json;
use std::time::Instant;

/// Branch, commit and package version, plus a little about the request.
pub async fn version(State(state): State<SharedState>, headers: HeaderMap, uri: Uri) -> Response {
    let started = Instant::now();
    let requested_at = chrono::Local::now();

    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    let url = format!("http://{}{}", host, uri);

    let info = format!("{} {}", state.config.git_branch, state.config.git_commit);
    tracing::debug!("Version info: {}", info);

    pretty_json_response(&json!({
        "request": {
            "url": url,
            "timestamp": requested_at.to_rfc3339(),
        },
        "response": {
            "package": env!("CARGO_PKG_NAME"),
            "package_version": env!("CARGO_PKG_VERSION"),
            "version": info,
            "elapsed_time": format!("{:?}", started.elapsed()),
        },
    }))
}

/// Lets operators confirm failures reach the logs. Only active when `DEBUG` is set.
pub async fn error_check(State(state): State<SharedState>) -> Result<Response, AppError> {
    tracing::debug!("error_check called (debug={})", state.config.debug);
    if state.config.debug {
        return Err(AppError::Internal(anyhow::anyhow!(
            "Raising intentional error to check error reporting"
        )));
    }
    Ok((StatusCode::NOT_FOUND, Html("<div>404 / Not Found</div>")).into_response())
}
