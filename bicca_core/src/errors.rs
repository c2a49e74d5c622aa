//! # Error Types
//!
//! The shell has almost no failure modes: missing form records default to
//! empty, out-of-range tutorial moves are ignored and unknown tabs are
//! dropped. The errors here only cover parsing names at the string boundary
//! (window names, tab captions, look-up categories).
//!
//! ## Example
//!
//! ```rust
//! use bicca_core::errors::ShellError;
//! use bicca_core::panels::Tab;
//!
//! let err = "Settings".parse::<Tab>().unwrap_err();
//! assert_eq!(err, ShellError::unknown_tab("Settings"));
//! assert_eq!(err.error_code(), "UNKNOWN_TAB");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bicca_core operations
pub type ShellResult<T> = Result<T, ShellError>;

/// Structured error type for name lookups.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ShellError {
    /// Caption does not name one of the four window tabs
    #[error("Unknown tab: '{name}'")]
    UnknownTab { name: String },

    /// Window name does not match any category dialog
    #[error("Unknown dialog window: '{window_name}'")]
    UnknownDialog { window_name: String },

    /// Label does not match any data look-up category
    #[error("Unknown look-up category: '{label}'")]
    UnknownLookup { label: String },
}

impl ShellError {
    /// Create an UnknownTab error
    pub fn unknown_tab(name: impl Into<String>) -> Self {
        ShellError::UnknownTab { name: name.into() }
    }

    /// Create an UnknownDialog error
    pub fn unknown_dialog(window_name: impl Into<String>) -> Self {
        ShellError::UnknownDialog {
            window_name: window_name.into(),
        }
    }

    /// Create an UnknownLookup error
    pub fn unknown_lookup(label: impl Into<String>) -> Self {
        ShellError::UnknownLookup { label: label.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ShellError::UnknownTab { .. } => "UNKNOWN_TAB",
            ShellError::UnknownDialog { .. } => "UNKNOWN_DIALOG",
            ShellError::UnknownLookup { .. } => "UNKNOWN_LOOKUP",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ShellError::unknown_dialog("Roofing");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("UnknownDialog"));
        let roundtrip: ShellError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ShellError::unknown_tab("x").error_code(), "UNKNOWN_TAB");
        assert_eq!(ShellError::unknown_lookup("x").error_code(), "UNKNOWN_LOOKUP");
    }

    #[test]
    fn test_error_display() {
        let err = ShellError::unknown_tab("Settings");
        assert_eq!(err.to_string(), "Unknown tab: 'Settings'");
    }
}
