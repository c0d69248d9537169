//! Static navigation entries and footer actions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon reference understood by the frontend icon set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    Dashboard,
    Settings,
    HelpOutline,
    Logout,
    /// Brand mark shown in the collapsed header
    Traffic,
    ChevronLeft,
    ChevronRight,
    /// Hamburger used by the mobile top bar
    Menu,
}

impl fmt::Display for NavIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Dashboard => write!(f, "dashboard"),
            Self::Settings => write!(f, "settings"),
            Self::HelpOutline => write!(f, "help_outline"),
            Self::Logout => write!(f, "logout"),
            Self::Traffic => write!(f, "traffic"),
            Self::ChevronLeft => write!(f, "chevron_left"),
            Self::ChevronRight => write!(f, "chevron_right"),
            Self::Menu => write!(f, "menu"),
        }
    }
}

/// One primary navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Visible label (also the tooltip text when collapsed)
    pub label: &'static str,
    /// Icon shown in both presentations
    pub icon: NavIcon,
    /// Route path the entry navigates to
    pub path: &'static str,
}

impl NavEntry {
    /// Whether this entry corresponds to the current route.
    ///
    /// Exact comparison: `/settings/profile` does not activate `/settings`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

/// Primary navigation, in display order.
pub static MENU_ITEMS: [NavEntry; 2] = [
    NavEntry { label: "Dashboard", icon: NavIcon::Dashboard, path: "/" },
    NavEntry { label: "Settings", icon: NavIcon::Settings, path: "/settings" },
];

/// Entry matching the current route, if any.
pub fn active_entry(current_path: &str) -> Option<&'static NavEntry> {
    MENU_ITEMS.iter().find(|entry| entry.is_active(current_path))
}

/// Account actions pinned below the navigation list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FooterAction {
    Help,
    Logout,
}

impl FooterAction {
    /// Both actions, in display order.
    pub const ALL: [Self; 2] = [Self::Help, Self::Logout];

    pub fn label(self) -> &'static str {
        match self {
            Self::Help => "Help & Support",
            Self::Logout => "Logout",
        }
    }

    pub fn icon(self) -> NavIcon {
        match self {
            Self::Help => NavIcon::HelpOutline,
            Self::Logout => NavIcon::Logout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_items_order() {
        let labels: Vec<_> = MENU_ITEMS.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Settings"]);
        assert_eq!(MENU_ITEMS[0].path, "/");
        assert_eq!(MENU_ITEMS[1].path, "/settings");
    }

    #[test]
    fn test_clicked_entry_becomes_the_only_active_one() {
        for clicked in &MENU_ITEMS {
            // Navigating to the entry's path makes the router report it.
            let current_path = clicked.path;
            for entry in &MENU_ITEMS {
                assert_eq!(entry.is_active(current_path), entry == clicked);
            }
            assert_eq!(active_entry(current_path), Some(clicked));
        }
    }

    #[test]
    fn test_is_active_is_exact() {
        let settings = MENU_ITEMS[1];
        assert!(!settings.is_active("/settings/profile"));
        assert!(!settings.is_active("/Settings"));
        assert!(!MENU_ITEMS[0].is_active("/settings"));
        assert_eq!(active_entry("/login"), None);
    }

    #[test]
    fn test_footer_actions() {
        assert_eq!(FooterAction::Help.label(), "Help & Support");
        assert_eq!(FooterAction::Logout.icon(), NavIcon::Logout);
        assert_eq!(FooterAction::ALL.len(), 2);
    }

    #[test]
    fn test_icon_display_matches_serde_name() {
        let json = serde_json::to_string(&NavIcon::HelpOutline).unwrap_or_default();
        assert_eq!(json, format!("\"{}\"", NavIcon::HelpOutline));
    }
}
