//! src/panels/status.rs
//!
//! Marker status: each element id with its markers, flagging the active one
//! and warning when the page does not have exactly one active panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::switcher::{PanelElement, PanelId};

pub struct StatusRow {
    pub panel: PanelId,
    pub element_id: String,
    pub markers: Vec<String>,
    pub active: bool,
}

impl StatusRow {
    pub fn of(panel: PanelId, el: &PanelElement, active: bool) -> Self {
        Self {
            panel,
            element_id: el.id.clone(),
            markers: el.markers().map(str::to_string).collect(),
            active,
        }
    }
}

pub struct StatusPanel {
    pub marker: String,
    pub rows: Vec<StatusRow>,
}

impl StatusPanel {
    pub fn new(marker: &str, rows: Vec<StatusRow>) -> Self {
        Self {
            marker: marker.to_string(),
            rows,
        }
    }

    fn active_count(&self) -> usize {
        self.rows.iter().filter(|r| r.active).count()
    }
}

impl crate::ui::Surface for StatusPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = self
            .rows
            .iter()
            .map(|r| {
                let (flag, style) = if r.active {
                    ("*", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
                } else {
                    (" ", Style::default().fg(Color::Gray))
                };
                Line::from(vec![
                    Span::styled(format!("{flag} {:<15}", r.element_id), style),
                    Span::raw(format!("{:<9}", r.panel.name())),
                    Span::styled(
                        format!("[{}]", r.markers.join(" ")),
                        Style::default().fg(Color::Cyan),
                    ),
                ])
            })
            .collect();

        let count = self.active_count();
        if count != 1 {
            lines.push(Line::from(Span::styled(
                format!("{count} panels marked '{}'", self.marker),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }

        let block = Block::default()
            .title(format!("Markers ({})", self.marker))
            .borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::render;
    use crate::switcher::Element;

    fn rows(active: &[PanelId]) -> Vec<StatusRow> {
        PanelElement::page()
            .into_iter()
            .zip(PanelId::ALL)
            .map(|(mut el, p)| {
                if active.contains(&p) {
                    el.add_marker("active");
                }
                StatusRow::of(p, &el, el.has_marker("active"))
            })
            .collect()
    }

    #[test]
    fn flags_the_marked_element() {
        let out = render(&StatusPanel::new("active", rows(&[PanelId::Register])), 60, 6);
        assert!(out.contains("* panel-register"));
        assert!(out.contains("[active]"));
        assert!(!out.contains("panels marked"));
    }

    #[test]
    fn warns_when_not_exactly_one_is_marked() {
        let out = render(&StatusPanel::new("active", rows(&[])), 60, 6);
        assert!(out.contains("0 panels marked 'active'"));
    }
}
