//! Query evaluation (pure).
//!
//! Turns records, columns and query state into an ordered selection of
//! record indices. No I/O, no shared state.

pub mod compare;
pub mod flags;
pub mod pipeline;

pub use compare::{collate, compare_values};
pub use flags::FeatureFlags;
pub use pipeline::{run_pipeline, PipelineOutput};
