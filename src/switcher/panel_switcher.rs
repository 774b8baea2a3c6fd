//! src/switcher/panel_switcher.rs
//!
//! Moves the active marker between the three registered elements.
//!
//! Invariant: after any `activate*` call exactly one element carries the
//! marker. Before the first call the elements keep whatever markers they were
//! injected with, which may be none or (for a broken page) several.

use super::{Element, PanelId, PanelRegistry, SwitchError};

pub struct PanelSwitcher<E> {
    registry: PanelRegistry<E>,
    marker: String,
}

impl<E: Element> PanelSwitcher<E> {
    pub fn new(registry: PanelRegistry<E>, marker: &str) -> Self {
        Self {
            registry,
            marker: marker.to_string(),
        }
    }

    /// Clear the marker from every panel, then set it on `panel`.
    pub fn activate(&mut self, panel: PanelId) {
        for (_, el) in self.registry.iter_mut() {
            el.remove_marker(&self.marker);
        }
        self.registry.get_mut(panel).add_marker(&self.marker);
    }

    /// Parse `name` and activate it. Nothing is touched when the name is invalid.
    pub fn activate_named(&mut self, name: &str) -> Result<PanelId, SwitchError> {
        let panel: PanelId = name.parse()?;
        self.activate(panel);
        Ok(panel)
    }

    /// Activate the panel after the current one (login when none is active).
    pub fn activate_next(&mut self) -> PanelId {
        let panel = self.active().map_or(PanelId::Login, PanelId::next);
        self.activate(panel);
        panel
    }

    /// Activate the panel before the current one (reset when none is active).
    pub fn activate_previous(&mut self) -> PanelId {
        let panel = self.active().map_or(PanelId::Reset, PanelId::previous);
        self.activate(panel);
        panel
    }

    /// The active panel, if exactly one element carries the marker.
    pub fn active(&self) -> Option<PanelId> {
        match self.active_panels().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Every panel whose element carries the marker.
    pub fn active_panels(&self) -> Vec<PanelId> {
        self.registry
            .iter()
            .filter(|(_, el)| el.has_marker(&self.marker))
            .map(|(p, _)| p)
            .collect()
    }

    pub fn is_active(&self, panel: PanelId) -> bool {
        self.registry.get(panel).has_marker(&self.marker)
    }

    pub fn element(&self, panel: PanelId) -> &E {
        self.registry.get(panel)
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }
}
