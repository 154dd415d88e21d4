pub mod embed;
pub mod error;
pub mod routes;
pub mod state;

use std::time::Duration;

use anyhow::Context;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use carrental_core::config::Config;
use carrental_core::page::RenderedPage;
use tower_http::trace::TraceLayer;
use tracing::{info, Span};

/// Build the axum Router serving the welcome page at `page_path`.
/// Used by `serve_on()` and available for integration testing.
pub fn build_router(page: RenderedPage, page_path: &str) -> Router {
    let app_state = state::AppState::new(page);

    Router::new()
        .route(page_path, get(routes::welcome::welcome))
        .fallback(embed::static_handler)
        .layer(TraceLayer::new_for_http().on_response(
            |response: &Response, latency: Duration, _span: &Span| {
                info!(
                    "returned {} in {}ms",
                    response.status(),
                    latency.as_millis()
                );
            },
        ))
        .with_state(app_state)
}

/// Render the configured page and start the server on `bind:port` from the
/// config. Runs until Ctrl-C.
pub async fn serve(config: &Config, open_browser: bool) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.bind, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    serve_on(config, listener, open_browser).await
}

/// Start the server on a listener the caller already bound, e.g. on port 0
/// in tests. The config's `bind`/`port` are ignored here.
pub async fn serve_on(
    config: &Config,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    config.ensure_valid()?;
    let page = RenderedPage::new(&config.page())?;
    let actual_port = listener.local_addr()?.port();
    let page_path = config.server.page_path.as_str();

    info!(
        bytes = page.len(),
        registration = %page.submission().action,
        "welcome page rendered"
    );
    info!("carrental listening on http://localhost:{actual_port}{page_path}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}{page_path}");
        if let Err(e) = open::that(&url) {
            tracing::warn!("could not open browser: {e}");
        }
    }

    let app = build_router(page, page_path);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("carrental stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
