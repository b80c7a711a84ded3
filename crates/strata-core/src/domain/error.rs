// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reported once per run, may be inspected many times)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Method '{name}' appears more than once")]
    DuplicateMethod { name: String },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("Unknown method '{name}'")]
    UnknownMethod { name: String, available: Vec<String> },
}

impl DomainError {
    /// Shorthand for the resolver's rejection of a required field.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { field, .. } => match *field {
                "entity name" => vec![
                    "The entity name must not be empty".into(),
                    "Example: strata generate Order".into(),
                ],
                "identifier type" => vec![
                    "Use one of: int, long, String".into(),
                    "Or pass any Java type, e.g. --id-type UUID".into(),
                ],
                "target directory" => vec![
                    "Pass an absolute path with --dir".into(),
                    "Or run strata from inside the target directory".into(),
                ],
                _ => vec![format!("Check the value given for {field}")],
            },
            Self::DuplicateMethod { name } => vec![
                format!("Select '{name}' only once"),
            ],
            Self::UnknownMethod { available, .. } => {
                let mut out = vec!["Available methods:".to_string()];
                out.extend(available.iter().map(|m| format!("  • {m}")));
                out.push("Try: strata methods".into());
                out
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::DuplicateMethod { .. } => ErrorCategory::Validation,
            Self::UnknownMethod { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
