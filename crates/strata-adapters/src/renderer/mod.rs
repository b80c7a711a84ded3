//! Artifact renderers.

mod java;
mod templates;

pub use java::JavaRenderer;
