//! src/switcher.rs
//!
//! Panel switching core: the closed panel enumeration, the element seam,
//! the injected registry and the switcher itself.

pub mod element;
pub mod error;
pub mod panel_id;
pub mod panel_switcher;
pub mod registry;

pub use element::{Element, PanelElement};
pub use error::SwitchError;
pub use panel_id::PanelId;
pub use panel_switcher::PanelSwitcher;
pub use registry::PanelRegistry;

/// Default marker applied to the active panel.
pub const ACTIVE_MARKER: &str = "active";
