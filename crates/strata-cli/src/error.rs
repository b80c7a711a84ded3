//! Error handling for the Strata CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use strata_core::error::StrataError;

pub use strata_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input rejected before reaching the core.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unknown configuration key '{key}'")]
    UnknownConfigKey {
        key: String,
        available: Vec<&'static str>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `strata-core`.
    #[error("{0}")]
    Core(#[from] StrataError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A report or listing could not be encoded as JSON.
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Operation cancelled by user.
    #[error("Operation cancelled")]
    Cancelled,

    /// Interactive prompting requested in a build without it.
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(feature = "interactive")]
impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::IoError {
            message: "prompt failed".into(),
            source: err.into(),
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Print the active file with: strata config path".into(),
                "Recreate it with: strata init --force".into(),
            ],

            Self::UnknownConfigKey { available, .. } => {
                let mut out = vec!["Known keys:".to_string()];
                out.extend(available.iter().map(|k| format!("  • {k}")));
                out
            }

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],

            Self::Serialization { .. } => vec![
                "This is a bug in Strata; please report it".into(),
                "Use --output-format plain in the meantime".into(),
            ],

            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No files were written".into(),
            ],

            Self::FeatureNotAvailable { feature } => vec![
                format!("The '{feature}' feature is not available in this build"),
                "Pass every choice as a flag, or rebuild with --features interactive".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::UnknownConfigKey { .. } => ErrorCategory::NotFound,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } | Self::Serialization { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::UserError,
            Self::FeatureNotAvailable { .. } => ErrorCategory::Configuration,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Render the error, its cause chain (when `verbose`) and suggestions
    /// for stderr. `color` adds ANSI styling.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: Style| -> String {
            if !color {
                return text.to_string();
            }
            match style {
                Style::Error => text.red().bold().to_string(),
                Style::Message => text.red().to_string(),
                Style::Muted => text.dimmed().to_string(),
                Style::Heading => text.yellow().bold().to_string(),
            }
        };

        let mut lines = vec![
            String::new(),
            format!(
                "{} {}",
                paint("\u{2717} Error:", Style::Error),
                paint(&self.to_string(), Style::Message)
            ),
        ];

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                lines.push(paint(&format!("  Caused by: {err}"), Style::Muted));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            lines.push(String::new());
            lines.push(paint("Suggestions:", Style::Heading));
            lines.extend(suggestions.iter().map(|s| format!("  {s}")));
        }

        if !verbose {
            lines.push(String::new());
            lines.push(paint("Use -v / --verbose for more details.", Style::Muted));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Emit one tracing event at a severity matching the category.
    pub fn log(&self) {
        let category = self.category();
        let cause = self.source().map(ToString::to_string);
        let cause = cause.as_deref();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, cause, "{self}");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, cause, "{self}");
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Style {
    Error,
    Message,
    Muted,
    Heading,
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use strata_core::application::ApplicationError;
    use strata_core::domain::DomainError;

    fn core(err: impl Into<StrataError>) -> CliError {
        CliError::Core(err.into())
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn resolver_rejection_is_a_user_error() {
        let err = core(DomainError::invalid("entity name", "must not be empty"));
        assert_eq!(err.exit_code(), 2);
        assert!(err.suggestions().iter().any(|s| s.contains("strata generate")));
    }

    #[test]
    fn unknown_method_is_not_found() {
        let err = core(DomainError::UnknownMethod {
            name: "purge".into(),
            available: vec!["findAll".into()],
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn generation_failure_is_internal() {
        let err = core(ApplicationError::GenerationFailed {
            failed: 1,
            total: 5,
            failures: vec![],
        });
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn core_configuration_maps_to_config_exit() {
        let err = core(StrataError::Configuration {
            message: "bad package".into(),
        });
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn render_lists_suggestions() {
        let err = CliError::UnknownConfigKey {
            key: "defaults.lang".into(),
            available: vec!["defaults.id_type"],
        };
        let s = err.render(false, false);
        assert!(s.contains("Error: Unknown configuration key 'defaults.lang'"));
        assert!(!s.contains('\x1b'));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("defaults.id_type"));
    }

    #[test]
    fn verbose_render_omits_hint() {
        let s = CliError::Cancelled.render(true, false);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn verbose_render_shows_cause() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::other("disk full"),
        };
        assert!(err.render(true, false).contains("Caused by: disk full"));
        assert!(!err.render(false, false).contains("Caused by"));
    }
}
