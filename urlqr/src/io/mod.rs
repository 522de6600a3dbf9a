//! Side-effecting adapters used by the pipeline.

pub mod collector;
pub mod writer;
