//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `strata-adapters` crate provides implementations.

use std::path::Path;

use serde::Serialize;

use crate::application::ApplicationError;
use crate::domain::{GenerationTask, ResolvedParameters};
use crate::error::StrataResult;

/// Result of a create-if-absent write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOutcome {
    Written,
    /// The file already existed and was left untouched.
    Skipped,
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `strata_adapters::filesystem::LocalFilesystem` (production)
/// - `strata_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Implementations are shared across concurrently running generation tasks,
/// hence `Send + Sync`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> StrataResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()>;

    /// Write content only if `path` does not exist yet.
    ///
    /// The default goes through [`Filesystem::exists`]; adapters that can
    /// create-exclusive should override it.
    fn write_new(&self, path: &Path, content: &str) -> StrataResult<WriteOutcome> {
        if self.exists(path) {
            return Ok(WriteOutcome::Skipped);
        }
        self.write_file(path, content)?;
        Ok(WriteOutcome::Written)
    }

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for artifact rendering.
///
/// Implemented by:
/// - `strata_adapters::renderer::JavaRenderer` (Spring Boot / JPA)
///
/// A renderer is a pure function of the task and the parameters.
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactRenderer: Send + Sync {
    /// Produce the full text of the file `task` writes.
    fn render(&self, task: &GenerationTask, params: &ResolvedParameters) -> StrataResult<String>;
}

/// Map an I/O failure to the application error adapters report.
pub fn filesystem_error(path: &Path, operation: &str, err: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {err}"),
    }
}
