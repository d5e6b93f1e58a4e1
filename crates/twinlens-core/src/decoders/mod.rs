//! Image decoding and normalization
//!
//! Decodes raw PNG/JPEG/WebP bytes into an RGBA pixel buffer and downscales
//! it so the analysis stages work on a bounded amount of data.

#[cfg(test)]
mod tests;

use image::imageops::{self, FilterType};
use thiserror::Error;

use crate::verbose_println;

/// Largest width the analysis pipeline works on. Wider inputs are downscaled
/// uniformly; smaller inputs pass through unscaled.
pub const MAX_WIDTH: u32 = 400;

/// Error raised when input bytes cannot be interpreted as a supported raster
/// format. This is the only failure mode of the whole pipeline; every stage
/// after decoding is a total function.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Zero-byte input
    #[error("empty input: no image bytes provided")]
    EmptyInput,

    /// Corrupt data or an unsupported encoding
    #[error("unsupported or corrupt image data: {0}")]
    InvalidImage(String),
}

/// Decoded, normalized image data
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels (1..=MAX_WIDTH after normalization)
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Dense RGBA data, `width * height * 4` bytes. Alpha is carried for
    /// preview rendering but ignored by all analysis.
    pub data: Vec<u8>,
}

impl DecodedImage {
    /// Total pixel count
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Decode an image from raw bytes and normalize its size.
///
/// The scale factor is `min(1, MAX_WIDTH / width)`, applied uniformly to both
/// dimensions, so aspect ratio is preserved and images are never upsized.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let decoded =
        image::load_from_memory(bytes).map_err(|e| DecodeError::InvalidImage(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (src_w, src_h) = rgba.dimensions();

    let rgba = if src_w > MAX_WIDTH {
        let (w, h) = scaled_dimensions(src_w, src_h);
        verbose_println!("[twinlens] Downscaling {}x{} -> {}x{}", src_w, src_h, w, h);
        imageops::resize(&rgba, w, h, FilterType::Triangle)
    } else {
        rgba
    };

    let (width, height) = rgba.dimensions();
    Ok(DecodedImage {
        width,
        height,
        data: rgba.into_raw(),
    })
}

/// Target dimensions for an oversized source, truncated to integers and
/// clamped so the height never collapses to zero.
fn scaled_dimensions(src_w: u32, src_h: u32) -> (u32, u32) {
    debug_assert!(src_w > MAX_WIDTH);
    let h = (src_h as u64 * MAX_WIDTH as u64) / src_w as u64;
    (MAX_WIDTH, (h as u32).max(1))
}
