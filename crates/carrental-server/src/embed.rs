use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

use crate::error::AppError;

#[derive(Embed)]
#[folder = "$CARGO_MANIFEST_DIR/assets/"]
struct StaticAssets;

/// Serve embedded assets for any path the router does not handle.
pub async fn static_handler(uri: axum::http::Uri) -> Result<Response, AppError> {
    let path = uri.path().trim_start_matches('/');

    match <StaticAssets as Embed>::get(path) {
        Some(content) if !path.is_empty() => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            Ok((
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.as_ref())],
                content.data.to_vec(),
            )
                .into_response())
        }
        _ => Err(AppError::not_found(uri.path())),
    }
}
