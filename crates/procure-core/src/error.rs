//! # Error Types
//!
//! Domain-specific error types for procure-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  procure-core errors (this file)                                       │
//! │  ├── CoreError         - General domain errors                         │
//! │  ├── ValidationError   - One failed field check                        │
//! │  └── ValidationErrors  - Every failed check of a submitted form        │
//! │                                                                         │
//! │  session errors (apps/session)                                         │
//! │  └── ApiError          - What the view layer sees (serialized)         │
//! │                                                                         │
//! │  Flow: ValidationError → ValidationErrors → CoreError → ApiError       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Invalid numeric input is clamped and structural no-ops (removing the last
//! line item, updating an unknown id) return the input unchanged. Neither
//! ever produces one of these types.

use std::fmt;

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A single field failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A submitted form is missing required fields.
    ///
    /// Only raised at submission; totals are computed regardless.
    #[error("Form is incomplete: {0}")]
    Incomplete(#[from] ValidationErrors),

    /// A snapshot could not be serialized for handoff.
    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// A confirmation checkbox was left unchecked.
    #[error("{field} must be confirmed")]
    MustBeConfirmed { field: String },

    /// Value could not be parsed.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::MustBeConfirmed { field }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Validation Errors (collected)
// =============================================================================

/// All validation failures of one form, in field order.
///
/// Forms report every missing field at once so the view layer can mark
/// them all in a single pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Records the error of a failed check, ignores a passed one.
    pub fn check(&mut self, result: Result<(), ValidationError>) {
        if let Err(e) = result {
            self.0.push(e);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Names of all failing fields.
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(ValidationError::field).collect()
    }

    /// `Ok(())` when nothing failed, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "supplierName".to_string(),
        };
        assert_eq!(err.to_string(), "supplierName is required");

        let err = ValidationError::MustBeConfirmed {
            field: "orderingAgreement".to_string(),
        };
        assert_eq!(err.to_string(), "orderingAgreement must be confirmed");
    }

    #[test]
    fn test_collected_errors_display() {
        let mut errors = ValidationErrors::new();
        errors.check(Ok(()));
        errors.check(Err(ValidationError::Required {
            field: "supplierName".to_string(),
        }));
        errors.push(ValidationError::Required {
            field: "supplierAddress".to_string(),
        });

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.fields(), vec!["supplierName", "supplierAddress"]);
        assert_eq!(
            errors.to_string(),
            "supplierName is required; supplierAddress is required"
        );
    }

    #[test]
    fn test_empty_errors_into_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_collected_errors_convert_to_core_error() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::Required {
            field: "supplier".to_string(),
        });
        let core_err: CoreError = errors.into();
        assert!(matches!(core_err, CoreError::Incomplete(_)));
    }
}
