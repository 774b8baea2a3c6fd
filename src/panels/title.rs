//! src/panels/title.rs
//!
//! Header bar naming the screen and the panel currently shown.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};

use crate::switcher::PanelId;

pub struct TitlePanel {
    pub title: String,
    pub active: Option<PanelId>,
}

impl TitlePanel {
    pub fn new(title: &str, active: Option<PanelId>) -> Self {
        Self {
            title: title.to_string(),
            active,
        }
    }
}

impl crate::ui::Surface for TitlePanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let showing = self.active.map_or("none", PanelId::name);
        let p = Paragraph::new(format!("{}  [{}]", self.title, showing))
            .block(Block::default().title("Title").borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
