//! Domain models for the Daloy sidebar.

mod collapse;
mod config;
mod drawer;
mod nav;
mod session;

pub use collapse::{apply_toggle, CollapseState};
pub use config::{SidebarConfig, LOGIN_ROUTE};
pub use drawer::{
    shows_expand_button, shows_labels, tooltip_for, DrawerGeometry, DrawerVariant, Viewport,
    COLLAPSED_WIDTH,
};
pub use nav::{active_entry, FooterAction, NavEntry, NavIcon, MENU_ITEMS};
pub use session::{
    is_authenticated, login, logout, mark_authenticated, AuthStore, Navigator, HOME_PATH,
};

#[cfg(test)]
pub(crate) mod fakes;
