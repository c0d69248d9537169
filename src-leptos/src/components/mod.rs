//! Reusable UI components

mod drawer;
mod icon;
mod list_button;
mod sidebar;
mod tooltip;

pub use drawer::Drawer;
pub use icon::Icon;
pub use list_button::ListButton;
pub use sidebar::Sidebar;
pub use tooltip::Tooltip;
