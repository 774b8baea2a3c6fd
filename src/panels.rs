//! src/panels.rs
//!
//! Drawable panels. Each one owns a snapshot of what it shows, taken from the
//! shared state once per frame, so drawing never touches a lock.

pub mod form;
pub mod history;
pub mod paragraph;
pub mod status;
pub mod tabs;
pub mod title;

pub use form::FormPanel;
pub use history::HistoryPanel;
pub use paragraph::ParagraphPanel;
pub use status::StatusPanel;
pub use tabs::TabsPanel;
pub use title::TitlePanel;

/// Render a surface into an off-screen buffer and return its text, row by row.
#[cfg(test)]
pub(crate) fn render(surface: &dyn crate::ui::Surface, width: u16, height: u16) -> String {
    use ratatui::{Terminal, backend::TestBackend};

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            surface.draw(f, area);
        })
        .unwrap();
    let buf = terminal.backend().buffer();
    buf.content()
        .chunks(width as usize)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
