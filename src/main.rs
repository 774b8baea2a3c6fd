//! src/main.rs
//!
//! Entrypoint: parse the CLI, load config, start logging, then hand over to `app::run()`.

mod app;
mod config;
mod logging;
mod net;
mod panels;
mod state;
mod switcher;
mod ui;

use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;

/// Terminal login / register / reset panel switcher.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to a config.toml; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Panel shown at startup: login, register, reset or none.
    #[arg(short, long)]
    panel: Option<String>,

    /// Log at debug level (RUST_LOG still wins).
    #[arg(long)]
    debug: bool,

    /// Do not start the TCP remote control server.
    #[arg(long)]
    no_remote: bool,

    /// Override the log file path.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(panel) = cli.panel {
        cfg.panels.initial = panel;
    }
    if cli.no_remote {
        cfg.remote.enabled = false;
    }
    cfg.validate()?;

    let log_file = cli
        .log_file
        .unwrap_or_else(|| PathBuf::from(&cfg.logging.file));
    logging::init(cli.debug, cfg.logging.level.as_deref(), &log_file)?;
    tracing::info!(config = ?cli.config, "starting");

    app::run(cfg)
}
