//! Failure taxonomy for the capture → encode → persist pipeline.
//!
//! Every stage returns [`PipelineError`]; the binary maps each variant to a
//! stable exit code via [`PipelineError::exit_code`].

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::exit_codes;

/// Which of the two output files an I/O fault belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Image,
    Text,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Image => f.write_str("image"),
            ArtifactKind::Text => f.write_str("text"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The collector could not obtain a value (no TTY, cancelled prompt, read fault).
    #[error("input unavailable: {reason}")]
    InputUnavailable { reason: String },

    /// Payload does not fit the largest QR symbol at the fixed error-correction level.
    #[error("payload of {len} bytes exceeds QR code capacity")]
    EncodingTooLarge { len: usize },

    #[error("QR symbol could not be built: {0}")]
    Symbol(qrcode::types::QrError),

    #[error("QR image could not be rendered as PNG")]
    Render(#[source] image::ImageError),

    /// Writing one artifact failed. `written_before` holds any artifact that
    /// was already persisted by this run, since the writes are not transactional.
    #[error("failed to write {artifact} artifact {}", path.display())]
    Persistence {
        artifact: ArtifactKind,
        path: PathBuf,
        written_before: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    #[error("output directory {} is unusable", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PipelineError {
    /// Exit code reported by the binary for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::InputUnavailable { .. } => exit_codes::INPUT_UNAVAILABLE,
            PipelineError::EncodingTooLarge { .. }
            | PipelineError::Symbol(_)
            | PipelineError::Render(_) => exit_codes::ENCODING_FAILED,
            PipelineError::Persistence { .. } | PipelineError::OutputDir { .. } => {
                exit_codes::PERSISTENCE_FAILED
            }
        }
    }

    pub(crate) fn input_unavailable(reason: impl Into<String>) -> Self {
        PipelineError::InputUnavailable {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_message_names_artifact_and_path() {
        let err = PipelineError::Persistence {
            artifact: ArtifactKind::Text,
            path: PathBuf::from("out/url.txt"),
            written_before: Some(PathBuf::from("out/0.5+1.png")),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to write text artifact out/url.txt");
        assert_eq!(err.exit_code(), exit_codes::PERSISTENCE_FAILED);
    }

    #[test]
    fn each_stage_maps_to_distinct_exit_code() {
        let input = PipelineError::input_unavailable("no tty");
        let encoding = PipelineError::EncodingTooLarge { len: 4000 };
        assert_eq!(input.exit_code(), exit_codes::INPUT_UNAVAILABLE);
        assert_eq!(encoding.exit_code(), exit_codes::ENCODING_FAILED);
        assert_ne!(input.exit_code(), encoding.exit_code());
        assert_eq!(
            encoding.to_string(),
            "payload of 4000 bytes exceeds QR code capacity"
        );
    }
}
