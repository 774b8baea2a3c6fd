//! src/switcher/registry.rs
//!
//! Explicit mapping from every `PanelId` to the element that backs it.
//!
//! The registry is handed to the switcher once, so no lookup by element id
//! happens when a panel is activated.

use super::{PanelId, SwitchError};

#[derive(Clone, Debug)]
pub struct PanelRegistry<E> {
    login: E,
    register: E,
    reset: E,
}

impl<E> PanelRegistry<E> {
    pub fn new(login: E, register: E, reset: E) -> Self {
        Self {
            login,
            register,
            reset,
        }
    }

    /// Build the registry by resolving each panel's fixed element id.
    ///
    /// # Errors
    /// `SwitchError::MissingElement` for the first panel whose element the
    /// lookup cannot produce.
    pub fn resolve<F>(mut lookup: F) -> Result<Self, SwitchError>
    where
        F: FnMut(&'static str) -> Option<E>,
    {
        let mut take = |panel: PanelId| {
            lookup(panel.element_id()).ok_or(SwitchError::MissingElement {
                panel,
                element_id: panel.element_id(),
            })
        };
        Ok(Self::new(
            take(PanelId::Login)?,
            take(PanelId::Register)?,
            take(PanelId::Reset)?,
        ))
    }

    pub fn get(&self, panel: PanelId) -> &E {
        match panel {
            PanelId::Login => &self.login,
            PanelId::Register => &self.register,
            PanelId::Reset => &self.reset,
        }
    }

    pub fn get_mut(&mut self, panel: PanelId) -> &mut E {
        match panel {
            PanelId::Login => &mut self.login,
            PanelId::Register => &mut self.register,
            PanelId::Reset => &mut self.reset,
        }
    }

    /// Entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (PanelId, &E)> {
        [
            (PanelId::Login, &self.login),
            (PanelId::Register, &self.register),
            (PanelId::Reset, &self.reset),
        ]
        .into_iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PanelId, &mut E)> {
        [
            (PanelId::Login, &mut self.login),
            (PanelId::Register, &mut self.register),
            (PanelId::Reset, &mut self.reset),
        ]
        .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::switcher::PanelElement;

    #[test]
    fn resolve_takes_elements_by_fixed_id() {
        let mut page = PanelElement::page();
        let reg = PanelRegistry::resolve(|id| {
            let pos = page.iter().position(|e| e.id == id)?;
            Some(page.remove(pos))
        })
        .unwrap();
        for (panel, el) in reg.iter() {
            assert_eq!(el.id, panel.element_id());
        }
        assert!(page.is_empty());
    }

    #[test]
    fn resolve_fails_loudly_on_missing_element() {
        let page: Vec<PanelElement> = PanelElement::page()
            .into_iter()
            .filter(|e| e.id != "panel-register")
            .collect();
        let err = PanelRegistry::resolve(|id| page.iter().find(|e| e.id == id).cloned())
            .unwrap_err();
        assert_eq!(
            err,
            SwitchError::MissingElement {
                panel: PanelId::Register,
                element_id: "panel-register",
            }
        );
    }

    #[test]
    fn get_mut_targets_the_right_slot() {
        let mut reg = PanelRegistry::new(0u8, 0, 0);
        *reg.get_mut(PanelId::Reset) = 7;
        assert_eq!(*reg.get(PanelId::Reset), 7);
        assert_eq!(*reg.get(PanelId::Login), 0);
        let order: Vec<_> = reg.iter().map(|(p, _)| p).collect();
        assert_eq!(order, PanelId::ALL.to_vec());
    }
}
