//! Application-level configuration.
//!
//! - [`PipelineParams`]: retrieval depth, fusion policy and call pacing

pub mod pipeline_params;

pub use pipeline_params::PipelineParams;
