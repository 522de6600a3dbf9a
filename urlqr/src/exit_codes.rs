//! Stable exit codes for the `urlqr` binary.
//!
//! `2` is left to `clap`, which uses it for usage errors.

/// Both artifacts were written.
pub const OK: i32 = 0;
/// Failure outside the pipeline stages (e.g. the working directory cannot be resolved).
pub const INVALID: i32 = 1;
/// The collector could not obtain a value.
pub const INPUT_UNAVAILABLE: i32 = 3;
/// The value could not be encoded (too large, or rendering failed).
pub const ENCODING_FAILED: i32 = 4;
/// An artifact could not be written, possibly after the other one was.
pub const PERSISTENCE_FAILED: i32 = 5;
