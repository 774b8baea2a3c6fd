//! src/panels/tabs.rs
//!
//! Tab strip listing the three panels with the active one highlighted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::switcher::PanelId;

pub struct TabsPanel {
    pub active: Option<PanelId>,
}

impl TabsPanel {
    pub fn new(active: Option<PanelId>) -> Self {
        Self { active }
    }

    fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(PanelId::ALL.len() * 2);
        for (i, panel) in PanelId::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            let label = format!("{} {}", i + 1, panel.name());
            let style = if self.active == Some(panel) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(label, style));
        }
        Line::from(spans)
    }
}

impl crate::ui::Surface for TabsPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let p = Paragraph::new(self.line())
            .block(Block::default().title("Panels").borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
