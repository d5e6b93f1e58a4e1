//! Grayscale conversion.

use crate::decoders::DecodedImage;

/// Single-channel intensity buffer derived from an RGBA image.
#[derive(Debug, Clone)]
pub struct GrayscaleBuffer {
    pub width: u32,
    pub height: u32,

    /// `width * height` intensities
    pub data: Vec<u8>,
}

/// Convert an RGBA buffer to grayscale.
///
/// Intensity is the truncating integer mean `(R + G + B) / 3`; alpha is
/// ignored. This buffer is the single source of truth for intensity: both
/// the pixel statistics and the edge detector read from it, so the
/// truncation semantics are part of the calibration and must not change.
pub fn to_grayscale(image: &DecodedImage) -> GrayscaleBuffer {
    let mut data = Vec::with_capacity(image.pixel_count());

    for rgba in image.data.chunks_exact(4) {
        let sum = rgba[0] as u16 + rgba[1] as u16 + rgba[2] as u16;
        data.push((sum / 3) as u8);
    }

    GrayscaleBuffer {
        width: image.width,
        height: image.height,
        data,
    }
}
