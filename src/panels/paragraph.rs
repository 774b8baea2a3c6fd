//! src/panels/paragraph.rs
//!
//! Static text block for key help and the footer.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub struct ParagraphPanel {
    pub text: String,
    pub title: String,
    pub dim: bool,
}

impl ParagraphPanel {
    pub fn new(text: &str, title: &str) -> Self {
        Self {
            text: text.to_string(),
            title: title.to_string(),
            dim: false,
        }
    }

    pub fn dimmed(mut self) -> Self {
        self.dim = true;
        self
    }
}

impl crate::ui::Surface for ParagraphPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let mut p = Paragraph::new(self.text.as_str())
            .wrap(Wrap { trim: true })
            .block(Block::default().title(self.title.as_str()).borders(Borders::ALL));
        if self.dim {
            p = p.style(Style::default().fg(Color::DarkGray));
        }
        f.render_widget(p, area);
    }
}
