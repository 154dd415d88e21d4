mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "carrental",
    about = "Car rental welcome page: serve it over HTTP or export it as static HTML",
    version,
    propagate_version = true
)]
struct Cli {
    /// Site root (default: auto-detect from .carrental/ or .git/)
    #[arg(long, global = true, env = "CARRENTAL_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default .carrental/config.yaml
    Init,

    /// Serve the welcome page over HTTP until Ctrl-C
    Serve {
        /// Port to listen on (0 = OS-assigned; default from config)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default from config)
        #[arg(long)]
        bind: Option<String>,

        /// Open the page in a browser once listening
        #[arg(long)]
        open: bool,
    },

    /// Render the welcome page to a file or stdout
    Render {
        /// Output file (default: stdout)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },

    /// Inspect or validate the configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Serve { port, bind, open } => cmd::serve::run(&root, port, bind, open),
        Commands::Render { out } => cmd::render::run(&root, out.as_deref()),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// `RUST_LOG` when set and parseable, otherwise `default_level` for everything.
fn log_filter(rust_log: Option<&str>, default_level: tracing::Level) -> EnvFilter {
    rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(default_level.into()))
}
