//! Drawer geometry and responsive presentation rules.

use serde::{Deserialize, Serialize};

/// Width of the desktop drawer when collapsed to icons.
pub const COLLAPSED_WIDTH: u32 = 72;

/// Viewport class relevant to the sidebar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Viewport {
    /// Narrower than the `sm` breakpoint
    Mobile,
    #[default]
    Desktop,
}

impl Viewport {
    pub fn from_is_mobile(is_mobile: bool) -> Self {
        if is_mobile {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }

    /// Drawer shown for this viewport.
    pub fn drawer_variant(self) -> DrawerVariant {
        match self {
            Self::Mobile => DrawerVariant::Temporary,
            Self::Desktop => DrawerVariant::Permanent,
        }
    }
}

/// Drawer presentation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DrawerVariant {
    /// Overlay with backdrop, opened on demand
    Temporary,
    /// In-flow, always open
    Permanent,
}

impl DrawerVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Temporary => "drawer--temporary",
            Self::Permanent => "drawer--permanent",
        }
    }
}

/// Expanded and collapsed widths of the sidebar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawerGeometry {
    pub expanded_width: u32,
    pub collapsed_width: u32,
}

impl DrawerGeometry {
    pub fn new(expanded_width: u32) -> Self {
        Self { expanded_width, collapsed_width: COLLAPSED_WIDTH }
    }

    /// Width reserved by the `nav` landmark.
    ///
    /// Only a collapsed desktop drawer shrinks; a mobile drawer is always
    /// rendered at full width.
    pub fn current_width(&self, collapsed: bool, viewport: Viewport) -> u32 {
        if collapsed && !viewport.is_mobile() {
            self.collapsed_width
        } else {
            self.expanded_width
        }
    }

    /// Width of the drawer paper for the given variant.
    pub fn paper_width(&self, variant: DrawerVariant, collapsed: bool, viewport: Viewport) -> u32 {
        match variant {
            DrawerVariant::Temporary => self.expanded_width,
            DrawerVariant::Permanent => self.current_width(collapsed, viewport),
        }
    }
}

/// Item labels, brand text and the collapse button appear only when expanded.
pub fn shows_labels(collapsed: bool) -> bool {
    !collapsed
}

/// The expand button lives below the logo tile on desktop only.
pub fn shows_expand_button(collapsed: bool, viewport: Viewport) -> bool {
    collapsed && !viewport.is_mobile()
}

/// Tooltip text for an item; labels are hidden when collapsed so the
/// tooltip carries them instead.
pub fn tooltip_for(collapsed: bool, label: &str) -> Option<&str> {
    collapsed.then_some(label)
}
