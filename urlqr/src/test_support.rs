//! Test-only helpers: scripted input sources and a QR decoder for round trips.

use std::cell::Cell;

use anyhow::{Context, Result, anyhow, bail};

use crate::core::types::InputValue;
use crate::error::PipelineError;
use crate::io::collector::InputSource;

/// Input source returning a predetermined outcome without touching a terminal.
pub struct ScriptedSource {
    outcome: std::result::Result<String, String>,
    calls: Cell<usize>,
}

impl ScriptedSource {
    /// Source that yields `value`.
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            outcome: Ok(value.into()),
            calls: Cell::new(0),
        }
    }

    /// Source that fails with `InputUnavailable { reason }`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
            calls: Cell::new(0),
        }
    }

    /// Number of times `collect` was called.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl InputSource for ScriptedSource {
    fn collect(&self) -> std::result::Result<InputValue, PipelineError> {
        self.calls.set(self.calls.get() + 1);
        match &self.outcome {
            Ok(value) => Ok(InputValue::new(value.clone())),
            Err(reason) => Err(PipelineError::InputUnavailable {
                reason: reason.clone(),
            }),
        }
    }
}

/// Decode the single QR symbol in a PNG buffer back to its text payload.
pub fn decode_png(png: &[u8]) -> Result<String> {
    let image = image::load_from_memory(png)
        .context("parse png")?
        .to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        image.width() as usize,
        image.height() as usize,
        |x, y| image.get_pixel(x as u32, y as u32).0[0],
    );
    let grids = prepared.detect_grids();
    let [grid] = grids.as_slice() else {
        bail!("expected exactly one qr symbol, found {}", grids.len());
    };
    let mut payload = Vec::new();
    grid.decode_to(&mut payload)
        .map_err(|err| anyhow!("decode qr symbol: {err:?}"))?;
    String::from_utf8(payload).context("qr payload is not utf-8")
}
