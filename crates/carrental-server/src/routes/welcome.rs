use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// GET <page_path> — the welcome page.
///
/// Ignores the query string, headers and cookies; every caller gets the bytes
/// rendered at startup.
pub async fn welcome(State(app): State<AppState>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        app.body.clone(),
    )
        .into_response()
}
