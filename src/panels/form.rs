//! src/panels/form.rs
//!
//! Body of the active panel: its title and one input line per form field.
//! Only the element carrying the active marker is shown.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::switcher::PanelElement;

pub struct FormPanel {
    pub element: Option<PanelElement>,
}

impl FormPanel {
    pub fn new(element: Option<PanelElement>) -> Self {
        Self { element }
    }
}

impl crate::ui::Surface for FormPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let Some(el) = &self.element else {
            let p = Paragraph::new("No panel is active. Press 1, 2 or 3.")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().title("Panel").borders(Borders::ALL));
            f.render_widget(p, area);
            return;
        };

        let width = el.fields.iter().map(|s| s.len()).max().unwrap_or(0);
        let mut lines = Vec::with_capacity(el.fields.len() * 2);
        for field in &el.fields {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{field:>width$}: "),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled("____________________", Style::default().fg(Color::DarkGray)),
            ]));
            lines.push(Line::default());
        }

        let block = Block::default()
            .title(format!("{} ({})", el.title, el.id))
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
