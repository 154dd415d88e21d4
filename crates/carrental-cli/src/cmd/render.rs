use anyhow::Context;
use carrental_core::{config::Config, io, page};
use std::path::Path;

/// Write the welcome page for static hosting, to `out` or stdout.
pub fn run(root: &Path, out: Option<&Path>) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    config.ensure_valid()?;

    let html = page::render(&config.page())?;
    match out {
        Some(path) => {
            io::atomic_write(path, html.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = html.len(), "page written");
        }
        None => print!("{html}"),
    }
    Ok(())
}
