//! src/switcher/panel_id.rs
//!
//! The closed set of panels on the authentication screen.

use std::fmt;
use std::str::FromStr;

use super::SwitchError;

/// One of the three panels. Enumeration order is login, register, reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelId {
    Login,
    Register,
    Reset,
}

impl PanelId {
    pub const ALL: [PanelId; 3] = [PanelId::Login, PanelId::Register, PanelId::Reset];

    /// Canonical lowercase name, as accepted by `from_str`.
    pub fn name(self) -> &'static str {
        match self {
            PanelId::Login => "login",
            PanelId::Register => "register",
            PanelId::Reset => "reset",
        }
    }

    /// Fixed identifier of the element backing this panel.
    pub fn element_id(self) -> &'static str {
        match self {
            PanelId::Login => "panel-login",
            PanelId::Register => "panel-register",
            PanelId::Reset => "panel-reset",
        }
    }

    /// Position in `ALL`.
    pub fn index(self) -> usize {
        match self {
            PanelId::Login => 0,
            PanelId::Register => 1,
            PanelId::Reset => 2,
        }
    }

    /// Following panel, wrapping from reset back to login.
    pub fn next(self) -> PanelId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding panel, wrapping from login back to reset.
    pub fn previous(self) -> PanelId {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PanelId {
    type Err = SwitchError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PanelId::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SwitchError::InvalidPanelReference(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_canonical_name() {
        for p in PanelId::ALL {
            assert_eq!(p.name().parse::<PanelId>(), Ok(p));
        }
    }

    #[test]
    fn parse_ignores_case_and_padding() {
        assert_eq!(" Register ".parse::<PanelId>(), Ok(PanelId::Register));
        assert_eq!("RESET".parse::<PanelId>(), Ok(PanelId::Reset));
    }

    #[test]
    fn unknown_name_is_invalid_reference() {
        let err = "signup".parse::<PanelId>().unwrap_err();
        assert_eq!(err, SwitchError::InvalidPanelReference("signup".into()));
        assert_eq!(err.to_string(), "invalid panel reference 'signup'");
        assert!("".parse::<PanelId>().is_err());
    }

    #[test]
    fn element_ids_match_page_identifiers() {
        assert_eq!(PanelId::Login.element_id(), "panel-login");
        assert_eq!(PanelId::Register.element_id(), "panel-register");
        assert_eq!(PanelId::Reset.element_id(), "panel-reset");
    }

    #[test]
    fn next_and_previous_wrap_around() {
        assert_eq!(PanelId::Reset.next(), PanelId::Login);
        assert_eq!(PanelId::Login.previous(), PanelId::Reset);
        for p in PanelId::ALL {
            assert_eq!(p.next().previous(), p);
        }
    }
}
