//! Sidebar configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::drawer::{DrawerGeometry, COLLAPSED_WIDTH};
use crate::error::ConfigError;

/// Route the frontend mounts the login page on.
pub const LOGIN_ROUTE: &str = "/login";

/// Branding, geometry and session settings for the sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(default)]
pub struct SidebarConfig {
    /// Text shown in the expanded header
    #[validate(length(min = 1, message = "brand name must not be empty"))]
    pub brand_name: String,
    /// Expanded drawer width in pixels
    #[validate(range(min = 1_u32, message = "drawer width must be positive"))]
    pub drawer_width: u32,
    /// Desktop drawer width when collapsed to icons
    #[validate(range(min = 1_u32, message = "collapsed width must be positive"))]
    pub collapsed_width: u32,
    /// Viewports narrower than this (px) use the temporary drawer
    #[validate(range(min = 1_u32, message = "breakpoint must be positive"))]
    pub mobile_breakpoint: u32,
    /// Route opened after logout; must be [`LOGIN_ROUTE`]
    pub login_path: String,
    /// Local storage key of the authentication flag
    #[validate(length(min = 1, message = "auth flag key must not be empty"))]
    pub auth_flag_key: String,
    /// Opened in a new tab by "Help & Support"; the item is inert without it
    pub help_url: Option<String>,
}

impl SidebarConfig {
    /// Parse a JSON document (missing fields take defaults) and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::from_json_error(&e))?;
        config.check()?;
        Ok(config)
    }

    /// Field and cross-field validation.
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate().map_err(|e| ConfigError::from_validation_errors(&e))?;

        if self.collapsed_width >= self.drawer_width {
            return Err(ConfigError::ValidationError {
                field: "collapsed_width".to_string(),
                message: format!(
                    "{} must be narrower than drawer_width {}",
                    self.collapsed_width, self.drawer_width
                ),
            });
        }

        if self.login_path != LOGIN_ROUTE {
            return Err(ConfigError::ValidationError {
                field: "login_path".to_string(),
                message: format!(
                    "'{}' has no login page, only {} is routed",
                    self.login_path, LOGIN_ROUTE
                ),
            });
        }

        Ok(())
    }

    pub fn geometry(&self) -> DrawerGeometry {
        DrawerGeometry {
            expanded_width: self.drawer_width,
            collapsed_width: self.collapsed_width,
        }
    }

    /// CSS media query matching the mobile viewport.
    pub fn mobile_media_query(&self) -> String {
        // Fractional edge keeps the query disjoint from `min-width: breakpoint`.
        format!("(max-width: {}.95px)", self.mobile_breakpoint.saturating_sub(1))
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            brand_name: "Daloy!".to_string(),
            drawer_width: 240,
            collapsed_width: COLLAPSED_WIDTH,
            mobile_breakpoint: 600,
            login_path: LOGIN_ROUTE.to_string(),
            auth_flag_key: "isAuthenticated".to_string(),
            help_url: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SidebarConfig::default();
        assert!(config.check().is_ok());
        assert_eq!(config.geometry().collapsed_width, 72);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SidebarConfig::from_json(r#"{"drawer_width": 280}"#).unwrap();
        assert_eq!(config.drawer_width, 280);
        assert_eq!(config.brand_name, "Daloy!");
        assert_eq!(config.login_path, "/login");
    }

    #[test]
    fn test_help_url() {
        let config =
            SidebarConfig::from_json(r#"{"help_url": "https://example.com/help"}"#).unwrap();
        assert_eq!(config.help_url.as_deref(), Some("https://example.com/help"));
    }

    #[test]
    fn test_invalid_json() {
        let err = SidebarConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = SidebarConfig::from_json(r#"{"drawer_width": 0}"#).unwrap_err();
        match err {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "drawer_width"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_collapsed_must_be_narrower() {
        let err = SidebarConfig::from_json(r#"{"drawer_width": 60}"#).unwrap_err();
        match err {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "collapsed_width"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_relative_login_path_rejected() {
        let err = SidebarConfig::from_json(r#"{"login_path": "login"}"#).unwrap_err();
        assert!(err.to_string().contains("login_path"));
    }

    #[test]
    fn test_unrouted_login_path_rejected() {
        let err = SidebarConfig::from_json(r#"{"login_path": "/signin"}"#).unwrap_err();
        match err {
            ConfigError::ValidationError { field, message } => {
                assert_eq!(field, "login_path");
                assert!(message.contains("/signin"));
            },
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(SidebarConfig::from_json(r#"{"login_path": "/login"}"#).is_ok());
    }

    #[test]
    fn test_mobile_media_query() {
        assert_eq!(SidebarConfig::default().mobile_media_query(), "(max-width: 599.95px)");
    }
}
