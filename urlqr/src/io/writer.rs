//! Artifact persistence: the image file and the text record.
//!
//! The two files are written independently, image first. Each write opens,
//! writes, syncs and closes its own handle; a failure on the second write is
//! returned even though the first file already exists on disk.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::core::naming::{ImageToken, TEXT_FILE_NAME};
use crate::core::types::{EncodedImage, InputValue};
use crate::error::{ArtifactKind, PipelineError};

/// Paths of the artifacts written by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub image: PathBuf,
    pub text: PathBuf,
}

/// Write `image` and `value` into `dir`.
///
/// The image is created fresh (`<token>+1.<ext>`) and never overwrites an
/// existing file; `url.txt` is created or truncated.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn write_artifacts(
    dir: &Path,
    image: &EncodedImage,
    value: &InputValue,
    token: ImageToken,
) -> Result<ArtifactPaths, PipelineError> {
    let image_path = dir.join(token.file_name(image.extension()));
    let text_path = dir.join(TEXT_FILE_NAME);

    let mut create_new = OpenOptions::new();
    create_new.write(true).create_new(true);
    persist(&create_new, &image_path, image.bytes()).map_err(|source| {
        PipelineError::Persistence {
            artifact: ArtifactKind::Image,
            path: image_path.clone(),
            written_before: None,
            source,
        }
    })?;
    info!(path = %image_path.display(), bytes = image.bytes().len(), "image artifact written");

    let mut overwrite = OpenOptions::new();
    overwrite.write(true).create(true).truncate(true);
    if let Err(source) = persist(&overwrite, &text_path, value.as_bytes()) {
        warn!(
            image = %image_path.display(),
            text = %text_path.display(),
            "text artifact failed after image artifact was written"
        );
        return Err(PipelineError::Persistence {
            artifact: ArtifactKind::Text,
            path: text_path,
            written_before: Some(image_path),
            source,
        });
    }
    info!(path = %text_path.display(), bytes = value.len(), "text artifact written");

    Ok(ArtifactPaths {
        image: image_path,
        text: text_path,
    })
}

/// Open `path` with `options`, write `contents`, and sync before the handle drops.
fn persist(options: &OpenOptions, path: &Path, contents: &[u8]) -> io::Result<()> {
    debug!(path = %path.display(), len = contents.len(), "writing artifact");
    let mut file: File = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}
