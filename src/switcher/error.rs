//! src/switcher/error.rs
//!
//! Errors raised while naming panels or wiring their elements.

use thiserror::Error;

use super::PanelId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwitchError {
    /// The name is not one of `login`, `register`, `reset`.
    #[error("invalid panel reference '{0}'")]
    InvalidPanelReference(String),

    /// The element backing a panel could not be found when building the registry.
    #[error("missing element '{element_id}' for panel {panel}")]
    MissingElement {
        panel: PanelId,
        element_id: &'static str,
    },
}
