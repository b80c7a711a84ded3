//! Infrastructure adapters for Strata.
//!
//! This crate implements the ports defined in `strata_core::application::ports`.
//! It contains all I/O and the Java source templates.

pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::JavaRenderer;
