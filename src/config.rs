//! src/config.rs
//!
//! Runtime configuration: which marker means "active", the panel shown at
//! startup, the remote control endpoint, logging and frame pacing.
//!
//! Loaded from an optional `config.toml`; every key has a default and unknown
//! keys are ignored. CLI flags are applied on top by `main`.

use std::path::Path;
use std::time::Duration;

use color_eyre::eyre::{WrapErr, bail};
use serde::Deserialize;

use crate::switcher::{ACTIVE_MARKER, PanelId, SwitchError};

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub panels: PanelsSection,
    pub remote: RemoteSection,
    pub logging: LoggingSection,
    pub ui: UiSection,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PanelsSection {
    /// Marker carried by the active panel's element.
    pub marker: String,
    /// Panel activated at startup, or "none" to leave every panel inactive.
    pub initial: String,
}

impl Default for PanelsSection {
    fn default() -> Self {
        Self {
            marker: ACTIVE_MARKER.to_string(),
            initial: PanelId::Login.name().to_string(),
        }
    }
}

impl PanelsSection {
    pub fn initial_panel(&self) -> Result<Option<PanelId>, SwitchError> {
        if self.initial.trim().eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        self.initial.parse().map(Some)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RemoteSection {
    pub enabled: bool,
    pub addr: String,
}

impl Default for RemoteSection {
    fn default() -> Self {
        Self {
            enabled: true,
            addr: "127.0.0.1:4000".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSection {
    /// `EnvFilter` directive used when neither RUST_LOG nor --debug is given.
    pub level: Option<String>,
    pub file: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: None,
            file: "auth-panels.log".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiSection {
    pub frame_ms: u64,
    /// Number of transitions kept in the journal.
    pub history: usize,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            frame_ms: 100,
            history: 50,
        }
    }
}

impl UiSection {
    pub fn frame_time(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

impl AppConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading config {}", path.display()))?;
        let cfg = Self::parse(&text).wrap_err_with(|| format!("in config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn parse(text: &str) -> color_eyre::Result<Self> {
        let cfg: AppConfig = toml::from_str(text).wrap_err("invalid TOML")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> color_eyre::Result<()> {
        let marker = &self.panels.marker;
        if marker.is_empty() || marker.chars().any(char::is_whitespace) {
            bail!("panels.marker must be a single non-empty word, got {marker:?}");
        }
        self.panels
            .initial_panel()
            .wrap_err("panels.initial must be login, register, reset or none")?;
        if self.ui.frame_ms == 0 {
            bail!("ui.frame_ms must be greater than zero");
        }
        if self.ui.history == 0 {
            bail!("ui.history must be greater than zero");
        }
        Ok(())
    }
}
