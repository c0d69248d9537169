//! Typed error definitions for Daloy.
//!
//! Errors are serializable, displayable and matchable, mirroring the rest of
//! the model types.

mod config;
mod session;

pub use config::ConfigError;
pub use session::SessionError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Wraps a session storage error
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

/// Standard Result type using TypedError.
pub type Result<T> = std::result::Result<T, TypedError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = TypedError::Session(SessionError::StorageUnavailable {
            reason: "private mode".to_string(),
        });

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Session"));
        assert!(json.contains("private mode"));

        let deserialized: TypedError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::ValidationError {
            field: "collapsed_width".to_string(),
            message: "must be narrower than drawer_width".to_string(),
        };

        let msg = format!("{}", TypedError::from(err));
        assert!(msg.starts_with("Config error"));
        assert!(msg.contains("collapsed_width"));
    }
}
