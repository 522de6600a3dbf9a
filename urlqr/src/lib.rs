//! Capture a URL, encode it as a QR code, and persist both.
//!
//! One run is a strict three-stage pipeline:
//!
//! 1. **Collect** ([`io::collector`]): prompt for, or receive, one text value.
//! 2. **Encode** ([`core::encoder`]): render the value as a PNG QR code.
//! 3. **Persist** ([`io::writer`]): write `<token>+1.png` and `url.txt`.
//!
//! The crate keeps the same split throughout:
//!
//! - **[`core`]**: Pure, deterministic logic (types, encoding, file naming).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (terminal, stdin, filesystem).
//!
//! [`pipeline`] wires the stages together for the `urlqr` binary.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod pipeline;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
