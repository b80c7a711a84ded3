//! Strata Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Strata, a tool
//! that generates the layered CRUD skeleton of one entity (entity, repository,
//! service contract and implementation, controller, support classes) into a
//! target directory.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            strata-cli (CLI)             │
//! │   (Prompts, flags, config, reporting)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (GenerationService)            │
//! │   Plans, fans out, aggregates failures  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Driven: Filesystem, Renderer)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    strata-adapters (Infrastructure)     │
//! │ (LocalFilesystem, JavaRenderer, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ResolvedParameters, DirectoryPlan,    │
//! │   ArtifactPlan, MethodSelection)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use strata_core::prelude::*;
//!
//! # async fn run(
//! #     filesystem: Arc<dyn Filesystem>,
//! #     renderer: Arc<dyn ArtifactRenderer>,
//! # ) -> StrataResult<()> {
//! let params = ResolvedParameters::resolve(RawChoices {
//!     entity_name: "order".into(),
//!     target_directory: "/work/src/main/java/com/shop".into(),
//!     id_type: "long".into(),
//!     methods: MethodSelection::from_catalog(&["findAll", "findById"])?,
//!     use_util_class: true,
//!     use_result_proc: false,
//! })?;
//!
//! let service = GenerationService::new(filesystem, renderer);
//! let report = service.generate(params).await?;
//! println!("{} files written", report.written.len());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationPlan, GenerationReport, GenerationService,
        ports::{ArtifactRenderer, Filesystem, WriteOutcome},
    };
    pub use crate::domain::{
        ArtifactKind, ArtifactPlan, DirectoryPlan, GenerationTask, IdType, MethodDescriptor,
        MethodSelection, OutputDirectory, RawChoices, RenderContext, ResolvedParameters,
        SupportBundle, WriteMode,
    };
    pub use crate::error::{StrataError, StrataResult};
}
