//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate the layers for one entity".

pub mod generation_service;

pub use generation_service::{GenerationPlan, GenerationReport, GenerationService};
