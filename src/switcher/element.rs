//! src/switcher/element.rs
//!
//! The element seam the switcher mutates, plus the in-memory element the
//! terminal page is built from.

use std::collections::BTreeSet;

/// Anything that can carry named presentation markers.
pub trait Element {
    fn add_marker(&mut self, marker: &str);
    fn remove_marker(&mut self, marker: &str);
    fn has_marker(&self, marker: &str) -> bool;
}

/// A page section with an id, a class list and the labels of its form fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelElement {
    pub id: String,
    pub title: String,
    pub fields: Vec<String>,
    classes: BTreeSet<String>,
}

impl PanelElement {
    pub fn new(id: &str, title: &str, fields: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
            classes: BTreeSet::new(),
        }
    }

    /// Current markers in sorted order.
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// The three sections of the authentication page, none marked.
    pub fn page() -> Vec<PanelElement> {
        vec![
            PanelElement::new("panel-login", "Sign in", &["E-mail", "Password"]),
            PanelElement::new(
                "panel-register",
                "Create account",
                &["Name", "E-mail", "Password", "Confirm password"],
            ),
            PanelElement::new("panel-reset", "Reset password", &["E-mail"]),
        ]
    }
}

impl Element for PanelElement {
    fn add_marker(&mut self, marker: &str) {
        self.classes.insert(marker.to_string());
    }

    fn remove_marker(&mut self, marker: &str) {
        self.classes.remove(marker);
    }

    fn has_marker(&self, marker: &str) -> bool {
        self.classes.contains(marker)
    }
}
