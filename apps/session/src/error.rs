//! # API Error Type
//!
//! Unified error type for session commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Forms Session                      │
//! │                                                                         │
//! │  View layer                  Session commands                           │
//! │  ──────────                  ────────────────                           │
//! │                                                                         │
//! │  submit_order()                                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Missing fields? ──── CoreError::Incomplete ──────┐             │  │
//! │  │         │                                          ▼             │  │
//! │  │  Malformed id? ────── ValidationError ─────────► ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Numeric field input never lands here: it is clamped, not rejected.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use procure_core::{CoreError, ValidationError};

/// API error returned from session commands.
///
/// ## Serialization
/// What the view layer receives when a command fails:
/// ```json
/// {
///   "code": "INCOMPLETE_FORM",
///   "message": "Form is incomplete: supplierName is required",
///   "fields": ["supplierName"]
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Form fields to highlight. Empty unless `code` is `IncompleteForm`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Malformed command argument
    ValidationError,

    /// Required fields missing at submission
    IncompleteForm,

    /// Configuration could not be loaded
    ConfigError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::from(e),
            CoreError::Incomplete(errors) => ApiError {
                code: ErrorCode::IncompleteForm,
                message: format!("Form is incomplete: {}", errors),
                fields: errors.fields().into_iter().map(String::from).collect(),
            },
            CoreError::Serialization(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Snapshot serialization failed: {}", e);
                ApiError::internal("Could not serialize snapshot")
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors while loading `procure.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use procure_core::ValidationErrors;

    #[test]
    fn test_incomplete_form_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::Required {
            field: "supplierName".to_string(),
        });

        let api = ApiError::from(CoreError::Incomplete(errors));
        assert_eq!(api.code, ErrorCode::IncompleteForm);
        assert_eq!(api.fields, vec!["supplierName".to_string()]);

        let json = serde_json::to_string(&api).unwrap();
        assert!(json.contains("\"code\":\"INCOMPLETE_FORM\""));
        assert!(json.contains("\"fields\":[\"supplierName\"]"));
    }

    #[test]
    fn test_plain_errors_omit_fields() {
        let api = ApiError::not_found("Expense category", "99999");
        assert_eq!(api.message, "Expense category not found: 99999");

        let json = serde_json::to_string(&api).unwrap();
        assert!(!json.contains("fields"));
        assert!(json.contains("\"code\":\"NOT_FOUND\""));
    }
}
