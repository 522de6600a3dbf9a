//! Values passed between pipeline stages.
//!
//! Both types are immutable once built: the collector hands an [`InputValue`]
//! to the encoder, which hands an [`EncodedImage`] to the writer.

/// The operator-entered URL or text, treated as opaque bytes downstream.
///
/// Empty values are valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValue(String);

impl InputValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A rendered QR symbol, ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    bytes: Vec<u8>,
    /// Symbol width in modules, quiet zone excluded.
    modules: usize,
    extension: &'static str,
}

impl EncodedImage {
    pub(crate) fn new(bytes: Vec<u8>, modules: usize, extension: &'static str) -> Self {
        Self {
            bytes,
            modules,
            extension,
        }
    }

    /// Encoded image file contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn modules(&self) -> usize {
        self.modules
    }

    /// File extension matching the encoding of [`Self::bytes`], without the dot.
    pub fn extension(&self) -> &'static str {
        self.extension
    }
}
