//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::domain::ArtifactKind;
use crate::error::ErrorCategory;

/// One failed generation task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskFailure {
    /// `None` when the task could not be identified (it panicked).
    pub artifact: Option<ArtifactKind>,
    pub path: Option<PathBuf>,
    pub reason: String,
}

impl fmt::Display for TaskFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.artifact, &self.path) {
            (Some(kind), Some(path)) => write!(f, "{kind} ({}): {}", path.display(), self.reason),
            (Some(kind), None) => write!(f, "{kind}: {}", self.reason),
            _ => f.write_str(&self.reason),
        }
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Artifact rendering failed.
    #[error("Rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// One or more generation tasks failed.
    #[error("{failed} of {total} artifacts failed; first failure: {}", first_reason(.failures))]
    GenerationFailed {
        failed: usize,
        total: usize,
        failures: Vec<TaskFailure>,
    },

    /// Shared state lock poisoned (in-memory adapters).
    #[error("Filesystem state lock poisoned")]
    LockPoisoned,
}

fn first_reason(failures: &[TaskFailure]) -> String {
    failures
        .first()
        .map_or_else(|| "unknown".to_string(), |f| f.to_string())
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the target directory exists".into(),
            ],
            Self::GenerationFailed { failures, .. } => {
                let mut out: Vec<String> = failures.iter().map(|f| format!("  • {f}")).collect();
                out.insert(0, "Failed artifacts:".into());
                out.push("Files written before the failure were left in place".into());
                out
            }
            Self::RenderingFailed { .. } => vec![
                "An artifact could not be rendered".into(),
                "Re-run with -vv for details".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::GenerationFailed { .. } => ErrorCategory::Internal,
            Self::RenderingFailed { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
