use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use carrental_core::RentalError;

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 404 Not Found error for a missing asset path.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self(RentalError::AssetNotFound(path.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<RentalError>() {
            match e {
                RentalError::AssetNotFound(_) => StatusCode::NOT_FOUND,
                RentalError::InvalidConfig(_)
                | RentalError::Template(_)
                | RentalError::Io(_)
                | RentalError::Yaml(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
