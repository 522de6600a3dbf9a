//! Artifact file names.
//!
//! The image name comes from a random token and is independent of the input;
//! the text name is constant so every run overwrites the previous record.

use rand::Rng;
use rand::distributions::Open01;

/// Constant name of the text artifact.
pub const TEXT_FILE_NAME: &str = "url.txt";

/// Random numeric token used only to name the image artifact.
///
/// Always strictly inside `(0, 1)`. Not cryptographic; two runs may draw the
/// same token, which the writer reports instead of overwriting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageToken(f64);

impl ImageToken {
    /// Draw a fresh token from `rng`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.sample(Open01))
    }

    /// Wrap a known value, rejecting anything outside `(0, 1)`.
    pub fn new(value: f64) -> Option<Self> {
        (value > 0.0 && value < 1.0).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// `<token>+1.<extension>`, e.g. `0.25+1.png`.
    pub fn file_name(self, extension: &str) -> String {
        format!("{}+1.{}", self.0, extension)
    }
}
