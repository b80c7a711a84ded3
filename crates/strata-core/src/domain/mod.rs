// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Strata.
//!
//! This module contains the generation-decision logic: resolving user choices,
//! planning directories, and selecting artifacts. All I/O and rendering happen
//! behind ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: Everything here is Clone + PartialEq
pub mod artifacts;
pub mod error;
pub mod layout;
pub mod methods;
pub mod parameters;
pub mod render_context;

pub use artifacts::{
    ArtifactKind, ArtifactPlan, CORE_ARTIFACTS, GenerationTask, SupportBundle, WriteMode,
};
pub use error::{DomainError, ErrorCategory};
pub use layout::{DirectoryPlan, OutputDirectory};
pub use methods::{ENTITY_PLACEHOLDER, MethodDescriptor, MethodSelection, catalog_names};
pub use parameters::{IdType, RawChoices, ResolvedParameters, normalize_entity_name};
pub use render_context::RenderContext;
