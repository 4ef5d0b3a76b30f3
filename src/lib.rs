pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use axum::{routing::get, Router};
use state::SharedState;
use tower_http::trace::TraceLayer;

pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/info/", get(handlers::info))
        .route("/info", get(handlers::info))
        .route("/daterange/", get(handlers::daterange))
        .route("/daterange", get(handlers::daterange))
        .route("/datecount/", get(handlers::datecount))
        .route("/datecount", get(handlers::datecount))
        .route("/version/", get(handlers::version))
        .route("/error_check/", get(handlers::error_check))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .with_state(state)
}
