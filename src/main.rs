#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use miso_gallery::cli::Args;
use miso_gallery::config::GalleryConfig;
use miso_gallery::server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("miso-gallery: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_tracing(&args);

    let config = GalleryConfig::from_args(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(server::serve(config))
}

/// Log to stderr; `RUST_LOG` takes precedence over -v/-q.
fn init_tracing(args: &Args) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_filter().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
