//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the single-page client. Build outputs live under `/dist`; any other
//! path is a real file from the public directory if one exists, otherwise the
//! entry document, so client-side routes work on deep links and reloads.

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{MethodRouter, get};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let dist = ServeDir::new(state.config.dist_dir());
    let history_fallback: MethodRouter = get(entry_document).with_state(state.clone());
    let public = ServeDir::new(&state.config.public_dir)
        .append_index_html_on_directories(false)
        .fallback(history_fallback);

    Router::new()
        .route("/", get(entry_document))
        .route("/index.html", get(entry_document))
        .route("/healthz", get(healthz))
        .nest_service("/dist", dist)
        .fallback_service(public)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn entry_document(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.document.clone())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
