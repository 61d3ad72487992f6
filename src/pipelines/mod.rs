//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait and the [Preprocess] pipeline,
//! that turns a Wikipedia split into a CoNLL-U file.
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod preprocess;

pub use pipeline::Pipeline;
pub use preprocess::{PipelineConfig, Preprocess, Stats};
