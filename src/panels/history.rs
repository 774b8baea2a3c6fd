//! src/panels/history.rs
//!
//! Most recent panel transitions, newest at the bottom.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::Transition;

pub struct HistoryPanel {
    pub entries: Vec<Transition>,
}

impl HistoryPanel {
    pub fn new(entries: Vec<Transition>) -> Self {
        Self { entries }
    }
}

impl crate::ui::Surface for HistoryPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        // two rows go to the border
        let height = area.height.saturating_sub(2) as usize;
        let start = self.entries.len().saturating_sub(height);
        let last_index = self.entries.len().saturating_sub(1);

        let lines: Vec<Line> = self
            .entries
            .iter()
            .enumerate()
            .skip(start)
            .map(|(i, t)| {
                let to_style = if i == last_index {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Green)
                };
                Line::from(vec![
                    Span::styled(format!("#{:<4}", t.seq), Style::default().fg(Color::Yellow)),
                    Span::raw(format!("{:>8} -> ", t.from.map_or("none", |p| p.name()))),
                    Span::styled(format!("{:<9}", t.to.name()), to_style),
                    Span::styled(format!("({})", t.origin), Style::default().fg(Color::Cyan)),
                ])
            })
            .collect();

        let block = Block::default().title("History").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
