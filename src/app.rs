//! src/app.rs
//!
//! Authentication screen host: builds the page elements, wires them into the
//! panel switcher, starts the remote control thread and runs the UI loop.
//!
//! # Keyboard Controls
//!
//! - **1** / **l** — show the login panel
//! - **2** / **r** — show the register panel
//! - **3** / **p** — show the password reset panel
//! - **Tab** / **Shift-Tab** — next / previous panel
//! - **q** / **Esc** — quit and restore the terminal
//!
//! # Remote Control
//!
//! When `[remote] enabled = true` (the default) a TCP server listens on
//! `[remote] addr` (default `127.0.0.1:4000`):
//!
//! ```text
//! $ nc 127.0.0.1 4000
//! show register
//! OK register
//! show signup
//! ERR invalid panel reference 'signup'
//! ```
//!
//! See `net::remote` for the full command list.
//!
//! # Layout
//!
//! Title on top, tab strip, then the active panel's form beside the marker
//! status and transition history, controls at the bottom.

use std::thread;
use std::time::{Duration, Instant};

use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Direction};

use crate::config::AppConfig;
use crate::net::remote::remote_server;
use crate::panels::status::StatusRow;
use crate::panels::{FormPanel, HistoryPanel, ParagraphPanel, StatusPanel, TabsPanel, TitlePanel};
use crate::state::{self, AppState, Origin, SharedState, StateError};
use crate::switcher::{PanelElement, PanelId, PanelRegistry, PanelSwitcher};
use crate::ui::{Node, group, leaf};

const CONTROLS: &str = "1/L=Login  2/R=Register  3/P=Reset  TAB=Next  SHIFT-TAB=Previous  Q=Quit";

/// What a key press asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Show(PanelId),
    Next,
    Previous,
    Quit,
}

pub fn key_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('1' | 'l' | 'L') => Some(Action::Show(PanelId::Login)),
        KeyCode::Char('2' | 'r' | 'R') => Some(Action::Show(PanelId::Register)),
        KeyCode::Char('3' | 'p' | 'P') => Some(Action::Show(PanelId::Reset)),
        KeyCode::Tab => Some(Action::Next),
        KeyCode::BackTab => Some(Action::Previous),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Apply a non-quit action to the state.
pub fn apply(st: &mut AppState, action: Action) {
    match action {
        Action::Show(panel) => st.show(panel, Origin::Keyboard),
        Action::Next => {
            st.show_next(Origin::Keyboard);
        }
        Action::Previous => {
            st.show_previous(Origin::Keyboard);
        }
        Action::Quit => {}
    }
}

/// Build the switcher over the built-in page, resolving each panel's element by id.
pub fn build_state(cfg: &AppConfig) -> color_eyre::Result<AppState> {
    let mut page = PanelElement::page();
    let registry = PanelRegistry::resolve(|id| {
        let pos = page.iter().position(|e| e.id == id)?;
        Some(page.remove(pos))
    })
    .wrap_err("wiring page elements")?;

    let switcher = PanelSwitcher::new(registry, &cfg.panels.marker);
    let mut st = AppState::new(switcher, cfg.ui.history);
    if let Some(panel) = cfg.panels.initial_panel()? {
        st.show(panel, Origin::Startup);
    }
    Ok(st)
}

/// Snapshot the state into a layout tree for one frame.
pub fn layout(st: &AppState) -> Node {
    let active = st.active();
    let switcher = &st.switcher;
    let rows = PanelId::ALL
        .into_iter()
        .map(|p| StatusRow::of(p, switcher.element(p), switcher.is_active(p)))
        .collect();
    let form = FormPanel::new(active.map(|p| switcher.element(p).clone()));

    group(
        Direction::Vertical,
        vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ],
        vec![
            leaf(TitlePanel::new("Account access", active)),
            leaf(TabsPanel::new(active)),
            group(
                Direction::Horizontal,
                vec![Constraint::Percentage(55), Constraint::Percentage(45)],
                vec![
                    leaf(form),
                    group(
                        Direction::Vertical,
                        vec![Constraint::Length(6), Constraint::Min(3)],
                        vec![
                            leaf(StatusPanel::new(switcher.marker(), rows)),
                            leaf(HistoryPanel::new(st.history.iter().cloned().collect())),
                        ],
                    ),
                ],
            ),
            leaf(ParagraphPanel::new(CONTROLS, "Controls").dimmed()),
        ],
    )
}

/// Take the read lock just long enough to build this frame's layout.
pub fn snapshot(shared: &SharedState) -> Result<Node, StateError> {
    Ok(layout(&*state::read(shared)?))
}

pub fn run(cfg: AppConfig) -> color_eyre::Result<()> {
    let shared = state::shared(build_state(&cfg)?);

    if cfg.remote.enabled {
        let addr = cfg.remote.addr.clone();
        let st = shared.clone();
        thread::spawn(move || remote_server(&addr, st));
    } else {
        tracing::info!("remote control disabled");
    }

    let mut terminal = ratatui::init();
    let result = ui_loop(&mut terminal, &shared, cfg.ui.frame_time());
    ratatui::restore();
    tracing::info!(ok = result.is_ok(), "ui loop finished");
    result
}

fn ui_loop(
    terminal: &mut ratatui::DefaultTerminal,
    shared: &SharedState,
    frame_time: Duration,
) -> color_eyre::Result<()> {
    loop {
        let frame_start = Instant::now();

        let root = snapshot(shared)?;
        terminal.draw(|f| {
            let area = f.area();
            root.draw(f, area);
        })?;

        while event::poll(Duration::from_millis(0))? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key_action(key.code) {
                Some(Action::Quit) => return Ok(()),
                Some(action) => apply(&mut *state::write(shared)?, action),
                None => tracing::trace!(code = ?key.code, "unbound key"),
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::render;
    use crate::state::test_state;

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(key_action(KeyCode::Char('1')), Some(Action::Show(PanelId::Login)));
        assert_eq!(key_action(KeyCode::Char('r')), Some(Action::Show(PanelId::Register)));
        assert_eq!(key_action(KeyCode::Char('P')), Some(Action::Show(PanelId::Reset)));
        assert_eq!(key_action(KeyCode::Tab), Some(Action::Next));
        assert_eq!(key_action(KeyCode::BackTab), Some(Action::Previous));
        assert_eq!(key_action(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(key_action(KeyCode::Char('x')), None);
    }

    #[test]
    fn cycling_from_nothing_starts_at_the_ends() {
        let mut st = test_state(10);
        apply(&mut st, Action::Next);
        assert_eq!(st.active(), Some(PanelId::Login));

        let mut st = test_state(10);
        apply(&mut st, Action::Previous);
        assert_eq!(st.active(), Some(PanelId::Reset));
        apply(&mut st, Action::Next);
        assert_eq!(st.active(), Some(PanelId::Login));
    }

    #[test]
    fn quit_leaves_state_untouched() {
        let mut st = test_state(10);
        apply(&mut st, Action::Quit);
        assert_eq!(st.active(), None);
        assert!(st.history.is_empty());
    }

    #[test]
    fn build_state_shows_the_configured_panel() {
        let mut cfg = AppConfig::default();
        let st = build_state(&cfg).unwrap();
        assert_eq!(st.active(), Some(PanelId::Login));
        assert_eq!(st.history.len(), 1);
        assert_eq!(st.history[0].origin, Origin::Startup);

        cfg.panels.initial = "none".into();
        let st = build_state(&cfg).unwrap();
        assert_eq!(st.active(), None);
        assert!(st.history.is_empty());
    }

    #[test]
    fn build_state_uses_the_configured_marker() {
        let mut cfg = AppConfig::default();
        cfg.panels.marker = "shown".into();
        cfg.panels.initial = "register".into();
        let st = build_state(&cfg).unwrap();
        assert_eq!(st.switcher.marker(), "shown");
        assert_eq!(st.active(), Some(PanelId::Register));
    }

    #[test]
    fn snapshot_reads_through_the_shared_lock() {
        let shared = state::shared(test_state(10));
        state::write(&shared).unwrap().show(PanelId::Reset, Origin::Remote);
        let root = snapshot(&shared).unwrap();
        let out = render(&root, 100, 30);
        assert!(out.contains("Reset password (panel-reset)"));
        // lock released once the layout is built
        assert!(shared.try_write().is_ok());
    }

    #[test]
    fn layout_renders_only_the_active_form() {
        let mut st = test_state(10);
        st.show(PanelId::Register, Origin::Keyboard);
        let out = render(&layout(&st), 100, 30);
        assert!(out.contains("Create account (panel-register)"));
        assert!(!out.contains("Sign in (panel-login)"));
        assert!(out.contains("Account access  [register]"));
    }
}
