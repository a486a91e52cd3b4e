//! # hybrank-core
//!
//! Foundation crate for the hybrid ranking pipeline.
//! Defines the shared models, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::HybrankConfig;
pub use errors::{HybrankError, HybrankResult};
pub use models::{Candidate, DocumentSource, FeatureVector};
pub use traits::{IEmbeddingProvider, ISearchIndex};
