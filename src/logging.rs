//! src/logging.rs
//!
//! File-backed `tracing` setup. The terminal belongs to the UI, so nothing is
//! written to stdout or stderr once the subscriber is installed.
//!
//! Filter priority: RUST_LOG > `--debug` > config level > "info".

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{WrapErr, eyre};
use tracing_subscriber::EnvFilter;

pub fn init(debug_flag: bool, config_level: Option<&str>, log_file: &Path) -> color_eyre::Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::try_new(level).wrap_err_with(|| format!("bad log level {level:?}"))?
    } else {
        EnvFilter::new("info")
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .wrap_err_with(|| format!("opening log file {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .compact()
        .try_init()
        .map_err(|e| eyre!("installing log subscriber: {e}"))?;

    tracing::debug!(
        app = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        file = %log_file.display(),
        "logging initialised"
    );
    Ok(())
}
