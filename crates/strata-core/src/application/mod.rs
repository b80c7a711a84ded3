//! Application layer for Strata.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All generation decisions live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerationPlan, GenerationReport, GenerationService};

// Re-export port traits (for adapter implementation)
pub use ports::{ArtifactRenderer, Filesystem, WriteOutcome, filesystem_error};

pub use error::{ApplicationError, TaskFailure};
