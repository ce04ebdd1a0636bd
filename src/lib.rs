pub mod config;
pub mod pipeline;

pub use pipeline::{analyze, AnalysisError, AnalysisReport};
