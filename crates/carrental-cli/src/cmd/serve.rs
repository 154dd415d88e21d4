use anyhow::Context;
use carrental_core::config::Config;
use std::path::Path;

pub fn run(
    root: &Path,
    port: Option<u16>,
    bind: Option<String>,
    open: bool,
) -> anyhow::Result<()> {
    let mut config = Config::load(root).context("failed to load config")?;
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(bind) = bind {
        config.server.bind = bind;
    }

    for w in config.validate() {
        tracing::warn!("config {}: {}", w.level.as_str(), w.message);
    }
    config.ensure_valid()?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(carrental_server::serve(&config, open))
}
