//! Orchestration for a single capture → encode → persist run.
//!
//! Stages run strictly in order and the first failure aborts the rest. There
//! are no retries and no state is carried between runs.

use std::fs;
use std::io;
use std::path::PathBuf;

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::core::encoder::encode;
use crate::core::naming::ImageToken;
use crate::core::types::InputValue;
use crate::error::PipelineError;
use crate::io::collector::InputSource;
use crate::io::writer::{ArtifactPaths, write_artifacts};

/// Configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Directory receiving both artifacts.
    pub output_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl PipelineConfig {
    /// Check that `output_dir` is an existing directory.
    pub fn validate(&self) -> Result<(), PipelineError> {
        let meta = fs::metadata(&self.output_dir).map_err(|source| self.unusable(source))?;
        if !meta.is_dir() {
            return Err(self.unusable(io::Error::new(
                io::ErrorKind::NotADirectory,
                "not a directory",
            )));
        }
        Ok(())
    }

    fn unusable(&self, source: io::Error) -> PipelineError {
        PipelineError::OutputDir {
            path: self.output_dir.clone(),
            source,
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub value: InputValue,
    pub artifacts: ArtifactPaths,
}

/// Run the pipeline once with a thread-local RNG for the image token.
pub fn run_pipeline<S: InputSource + ?Sized>(
    source: &S,
    config: &PipelineConfig,
) -> Result<RunOutcome, PipelineError> {
    run_pipeline_with_rng(source, config, &mut rand::thread_rng())
}

/// Run the pipeline once, drawing the image token from `rng`.
#[instrument(skip_all, fields(output_dir = %config.output_dir.display()))]
pub fn run_pipeline_with_rng<S: InputSource + ?Sized, R: Rng>(
    source: &S,
    config: &PipelineConfig,
    rng: &mut R,
) -> Result<RunOutcome, PipelineError> {
    config.validate()?;

    let value = source.collect()?;
    debug!(len = value.len(), "input collected");

    let image = encode(&value)?;

    let token = ImageToken::random(rng);
    let artifacts = write_artifacts(&config.output_dir, &image, &value, token)?;

    info!(
        image = %artifacts.image.display(),
        text = %artifacts.text.display(),
        "run complete"
    );
    Ok(RunOutcome { value, artifacts })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::error::ArtifactKind;
    use crate::test_support::{ScriptedSource, decode_png};

    fn config_for(dir: &Path) -> PipelineConfig {
        PipelineConfig {
            output_dir: dir.to_path_buf(),
        }
    }

    #[test]
    fn run_writes_decodable_image_and_text() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = ScriptedSource::value("https://example.com");

        let outcome = run_pipeline(&source, &config_for(temp.path())).expect("run");

        assert_eq!(outcome.value.as_str(), "https://example.com");
        let png = fs::read(&outcome.artifacts.image).expect("read image");
        assert_eq!(decode_png(&png).expect("decode"), "https://example.com");
        assert_eq!(
            fs::read_to_string(&outcome.artifacts.text).expect("read text"),
            "https://example.com"
        );
    }

    #[test]
    fn empty_input_completes() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = ScriptedSource::value("");

        let outcome = run_pipeline(&source, &config_for(temp.path())).expect("run");

        assert!(outcome.artifacts.image.exists());
        assert_eq!(fs::read_to_string(&outcome.artifacts.text).expect("read"), "");
    }

    #[test]
    fn seeded_rng_fixes_image_name() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = ScriptedSource::value("https://example.com");
        let expected = ImageToken::random(&mut StdRng::seed_from_u64(42)).file_name("png");

        let outcome = run_pipeline_with_rng(
            &source,
            &config_for(temp.path()),
            &mut StdRng::seed_from_u64(42),
        )
        .expect("run");

        assert_eq!(outcome.artifacts.image, temp.path().join(expected));
    }

    #[test]
    fn collector_failure_writes_nothing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = ScriptedSource::unavailable("no tty");

        let err = run_pipeline(&source, &config_for(temp.path())).expect_err("fails");

        assert!(matches!(err, PipelineError::InputUnavailable { .. }));
        let entries = fs::read_dir(temp.path()).expect("read dir").count();
        assert_eq!(entries, 0);
    }

    #[test]
    fn oversized_input_aborts_before_writing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = ScriptedSource::value("z".repeat(5000));

        let err = run_pipeline(&source, &config_for(temp.path())).expect_err("fails");

        assert!(matches!(err, PipelineError::EncodingTooLarge { len: 5000 }));
        assert_eq!(fs::read_dir(temp.path()).expect("read dir").count(), 0);
    }

    #[test]
    fn text_failure_fails_the_run() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(temp.path().join("url.txt")).expect("create blocker");
        let source = ScriptedSource::value("https://example.com");

        let err = run_pipeline(&source, &config_for(temp.path())).expect_err("fails");

        assert!(matches!(
            err,
            PipelineError::Persistence {
                artifact: ArtifactKind::Text,
                written_before: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn missing_output_dir_fails_before_collecting() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = ScriptedSource::value("https://example.com");

        let err = run_pipeline(&source, &config_for(&temp.path().join("missing")))
            .expect_err("fails");

        assert!(matches!(err, PipelineError::OutputDir { .. }));
        assert_eq!(source.calls(), 0);
    }

    #[test]
    fn file_as_output_dir_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("plain");
        fs::write(&file, "x").expect("write");

        let err = config_for(&file).validate().expect_err("not a dir");
        match err {
            PipelineError::OutputDir { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::NotADirectory);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
