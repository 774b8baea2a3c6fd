//! src/state.rs
//!
//! Shared application state: the panel switcher over the page elements and a
//! bounded journal of panel transitions. Shared between the UI loop and the
//! remote control threads.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::switcher::{PanelElement, PanelId, PanelSwitcher, SwitchError};

/// Where a panel change was requested from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Startup,
    Keyboard,
    Remote,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Origin::Startup => "startup",
            Origin::Keyboard => "keyboard",
            Origin::Remote => "remote",
        })
    }
}

/// One recorded change of the active panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub seq: u64,
    pub from: Option<PanelId>,
    pub to: PanelId,
    pub origin: Origin,
}

#[derive(Error, Debug)]
pub enum StateError {
    #[error("application state lock poisoned")]
    Poisoned,
}

pub struct AppState {
    pub switcher: PanelSwitcher<PanelElement>,
    pub history: VecDeque<Transition>,
    pub max_history: usize,
    next_seq: u64,
}

impl AppState {
    pub fn new(switcher: PanelSwitcher<PanelElement>, max_history: usize) -> Self {
        Self {
            switcher,
            history: VecDeque::new(),
            max_history: max_history.max(1),
            next_seq: 0,
        }
    }

    /// Activate `panel`, journaling the change if the active panel moved.
    pub fn show(&mut self, panel: PanelId, origin: Origin) {
        let from = self.switcher.active();
        self.switcher.activate(panel);
        self.record(from, panel, origin);
    }

    /// Activate the next panel (login when none is active).
    pub fn show_next(&mut self, origin: Origin) -> PanelId {
        let from = self.switcher.active();
        let panel = self.switcher.activate_next();
        self.record(from, panel, origin);
        panel
    }

    /// Activate the previous panel (reset when none is active).
    pub fn show_previous(&mut self, origin: Origin) -> PanelId {
        let from = self.switcher.active();
        let panel = self.switcher.activate_previous();
        self.record(from, panel, origin);
        panel
    }

    fn record(&mut self, from: Option<PanelId>, to: PanelId, origin: Origin) {
        if from == Some(to) {
            tracing::trace!(panel = %to, %origin, "panel already active");
            return;
        }
        tracing::debug!(from = ?from, %to, %origin, "panel switched");
        self.history.push_back(Transition {
            seq: self.next_seq,
            from,
            to,
            origin,
        });
        self.next_seq += 1;
        while self.history.len() > self.max_history {
            self.history.pop_front();
        }
    }

    /// Parse and activate; invalid names are logged and nothing changes.
    pub fn show_named(&mut self, name: &str, origin: Origin) -> Result<PanelId, SwitchError> {
        let from = self.switcher.active();
        match self.switcher.activate_named(name) {
            Ok(panel) => {
                self.record(from, panel, origin);
                Ok(panel)
            }
            Err(e) => {
                tracing::warn!(%origin, error = %e, "rejected panel switch");
                Err(e)
            }
        }
    }

    pub fn active(&self) -> Option<PanelId> {
        self.switcher.active()
    }
}

/// Alias: Arc<RwLock<AppState>>
pub type SharedState = Arc<RwLock<AppState>>;

pub fn shared(state: AppState) -> SharedState {
    Arc::new(RwLock::new(state))
}

pub fn read(state: &SharedState) -> Result<RwLockReadGuard<'_, AppState>, StateError> {
    state.read().map_err(|_| StateError::Poisoned)
}

pub fn write(state: &SharedState) -> Result<RwLockWriteGuard<'_, AppState>, StateError> {
    state.write().map_err(|_| StateError::Poisoned)
}

#[cfg(test)]
pub(crate) fn test_state(max_history: usize) -> AppState {
    use crate::switcher::{ACTIVE_MARKER, PanelRegistry};

    let [login, register, reset]: [PanelElement; 3] = PanelElement::page().try_into().unwrap();
    let switcher = PanelSwitcher::new(PanelRegistry::new(login, register, reset), ACTIVE_MARKER);
    AppState::new(switcher, max_history)
}
