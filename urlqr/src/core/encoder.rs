//! QR code encoding of the collected value into a PNG image.
//!
//! Symbol parameters are fixed: error-correction level M, version chosen
//! automatically, 5 px per module and the standard 4-module quiet zone.
//! Rendering is deterministic, so equal inputs give byte-identical PNGs.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};
use tracing::debug;

use crate::core::types::{EncodedImage, InputValue};
use crate::error::PipelineError;

/// Error-correction level for every symbol.
pub const EC_LEVEL: EcLevel = EcLevel::M;
/// Edge length of one module in pixels.
pub const MODULE_PX: u32 = 5;
/// Extension of the produced image format.
pub const IMAGE_EXTENSION: &str = "png";

/// Encode `value` as a QR symbol rendered to PNG bytes.
pub fn encode(value: &InputValue) -> Result<EncodedImage, PipelineError> {
    let code = QrCode::with_error_correction_level(value.as_bytes(), EC_LEVEL).map_err(
        |err| match err {
            QrError::DataTooLong => PipelineError::EncodingTooLarge { len: value.len() },
            other => PipelineError::Symbol(other),
        },
    )?;
    let modules = code.width();

    let image = code
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .module_dimensions(MODULE_PX, MODULE_PX)
        .build();

    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(PipelineError::Render)?;

    debug!(
        payload_bytes = value.len(),
        modules,
        png_bytes = bytes.len(),
        "encoded qr symbol"
    );
    Ok(EncodedImage::new(bytes, modules, IMAGE_EXTENSION))
}
