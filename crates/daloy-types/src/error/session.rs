//! Session storage errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by an [`AuthStore`](crate::AuthStore) backend.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum SessionError {
    /// No storage backend could be reached (no window, storage disabled)
    #[error("Session storage unavailable: {reason}")]
    StorageUnavailable {
        /// Why the backend is missing
        reason: String,
    },

    /// The backend refused the operation
    #[error("Session storage rejected {operation} of '{key}': {message}")]
    OperationFailed {
        /// `get`, `set` or `remove`
        operation: String,
        /// Storage key involved
        key: String,
        /// Backend-provided description
        message: String,
    },
}
