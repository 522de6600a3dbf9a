//! Deterministic, pure logic shared by the pipeline.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod encoder;
pub mod naming;
pub mod types;
