//! Input collection: interactive prompt, injected value, or piped stdin.
//!
//! The [`InputSource`] trait decouples the pipeline from where the value comes
//! from. Tests use scripted sources that return predetermined values without
//! touching the terminal.

use std::io::{self, Read};

use inquire::{InquireError, Text};
use tracing::{debug, instrument};

use crate::core::types::InputValue;
use crate::error::PipelineError;

/// Label shown by the interactive prompt.
pub const PROMPT_MESSAGE: &str = "type your url:";

/// Abstraction over where the single input value comes from.
pub trait InputSource {
    /// Obtain the value. Empty values are returned as-is.
    fn collect(&self) -> Result<InputValue, PipelineError>;
}

/// Interactive one-line prompt on the controlling terminal.
pub struct PromptSource;

impl InputSource for PromptSource {
    #[instrument(skip_all)]
    fn collect(&self) -> Result<InputValue, PipelineError> {
        debug!("presenting prompt");
        let answer = Text::new(PROMPT_MESSAGE)
            .prompt()
            .map_err(prompt_failure)?;
        Ok(InputValue::from(answer))
    }
}

fn prompt_failure(err: InquireError) -> PipelineError {
    let reason = match err {
        InquireError::NotTTY => {
            "no interactive terminal (pass --url or --stdin to run non-interactively)".to_string()
        }
        InquireError::OperationCanceled => "prompt cancelled".to_string(),
        InquireError::OperationInterrupted => "prompt interrupted".to_string(),
        other => format!("prompt failed: {other}"),
    };
    PipelineError::input_unavailable(reason)
}

/// A value supplied up front, e.g. from `--url`.
pub struct InjectedSource {
    value: String,
}

impl InjectedSource {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl InputSource for InjectedSource {
    fn collect(&self) -> Result<InputValue, PipelineError> {
        debug!(len = self.value.len(), "using injected value");
        Ok(InputValue::new(self.value.clone()))
    }
}

/// Reads the whole of standard input, for piped use (`--stdin`).
pub struct StdinSource;

impl InputSource for StdinSource {
    fn collect(&self) -> Result<InputValue, PipelineError> {
        let value = read_value(io::stdin().lock())?;
        debug!(len = value.len(), "read value from stdin");
        Ok(value)
    }
}

/// Read everything from `reader` and strip exactly one trailing line terminator.
///
/// The value must be UTF-8; other encodings are rejected with the offset of
/// the first invalid byte.
pub fn read_value<R: Read>(mut reader: R) -> Result<InputValue, PipelineError> {
    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .map_err(|err| PipelineError::input_unavailable(format!("read stdin: {err}")))?;
    let mut buf = String::from_utf8(raw).map_err(|err| {
        PipelineError::input_unavailable(format!(
            "stdin is not valid UTF-8 (invalid byte at offset {})",
            err.utf8_error().valid_up_to()
        ))
    })?;
    if buf.ends_with("\r\n") {
        buf.truncate(buf.len() - 2);
    } else if buf.ends_with('\n') {
        buf.truncate(buf.len() - 1);
    }
    Ok(InputValue::from(buf))
}
