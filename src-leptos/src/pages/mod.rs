//! Page components

mod dashboard;
mod login;
mod settings;

pub use dashboard::Dashboard;
pub use login::Login;
pub use settings::Settings;
