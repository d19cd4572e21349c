//! Unified error system for Gemel services
//!
//! A single error type covers all Gemel operations so that crates compose
//! without parallel error hierarchies. Faults that cross a service boundary
//! carry a message; classification is by variant.

use serde::{Deserialize, Serialize};

/// Unified error type for all Gemel operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum GemelError {
    /// Invalid input or request
    #[error("Invalid: {message}")]
    Invalid {
        /// Description of the invalid input
        message: String,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        /// Description of what was not found
        message: String,
    },

    /// Permission denied by an enforcer
    #[error("Permission denied: {message}")]
    PermissionDenied {
        /// Description of the denied operation
        message: String,
    },

    /// Internal system error, surfaced to callers as such
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal fault
        message: String,
    },

    /// Missing or inconsistent component wiring
    ///
    /// Signals a programmer or deployment fault (a collaborator that was
    /// required to be registered is absent), as opposed to a runtime or
    /// tenant condition.
    #[error("Wiring error: {message}")]
    Wiring {
        /// Description of the missing wiring
        message: String,
    },
}

impl GemelError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a wiring error
    pub fn wiring(message: impl Into<String>) -> Self {
        Self::Wiring {
            message: message.into(),
        }
    }
}

/// Standard Result type for Gemel operations
pub type Result<T> = std::result::Result<T, GemelError>;
