use axum::body::Bytes;
use carrental_core::page::RenderedPage;

/// Shared application state passed to all route handlers.
///
/// Everything here is immutable after startup; cloning is a refcount bump.
#[derive(Clone)]
pub struct AppState {
    pub page: RenderedPage,
    pub body: Bytes,
}

impl AppState {
    pub fn new(page: RenderedPage) -> Self {
        let body = Bytes::copy_from_slice(page.html().as_bytes());
        Self { page, body }
    }
}
