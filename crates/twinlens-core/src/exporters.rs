//! Preview encoders.
//!
//! Encode the derived grayscale and edge-map buffers back into PNG bytes so
//! the presentation layer can render them without knowing anything about the
//! internal buffer formats.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::pipeline::{GradientBuffer, GrayscaleBuffer};

/// Encode the grayscale buffer as an opaque RGBA PNG (intensity replicated
/// into all three color channels).
pub fn encode_grayscale_png(gray: &GrayscaleBuffer) -> Result<Vec<u8>, String> {
    let mut rgba = Vec::with_capacity(gray.data.len() * 4);
    for &v in &gray.data {
        rgba.extend_from_slice(&[v, v, v, 255]);
    }
    encode_rgba_png(gray.width, gray.height, rgba)
}

/// Encode the gradient buffer as an opaque RGBA PNG. Magnitudes are rounded
/// and clamped into 8-bit range; border pixels stay black.
pub fn encode_gradient_png(gradient: &GradientBuffer) -> Result<Vec<u8>, String> {
    let mut rgba = Vec::with_capacity(gradient.data.len() * 4);
    for &magnitude in &gradient.data {
        let v = magnitude.round().clamp(0.0, 255.0) as u8;
        rgba.extend_from_slice(&[v, v, v, 255]);
    }
    encode_rgba_png(gradient.width, gradient.height, rgba)
}

fn encode_rgba_png(width: u32, height: u32, rgba: Vec<u8>) -> Result<Vec<u8>, String> {
    let img = RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| format!("preview buffer does not match {}x{}", width, height))?;

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| format!("failed to encode preview PNG: {}", e))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, 0x0a];

    #[test]
    fn test_grayscale_preview_is_png() {
        let gray = GrayscaleBuffer {
            width: 3,
            height: 2,
            data: vec![0, 64, 128, 192, 255, 32],
        };

        let bytes = encode_grayscale_png(&gray).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (3, 2));
        // Intensity replicated into RGB, alpha opaque
        assert_eq!(decoded.get_pixel(1, 0).0, [64, 64, 64, 255]);
    }

    #[test]
    fn test_gradient_preview_clamps_magnitudes() {
        let gradient = GradientBuffer {
            width: 2,
            height: 2,
            data: vec![0.0, 80.4, 300.0, 255.0],
        };

        let bytes = encode_gradient_png(&gradient).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(1, 0).0, [80, 80, 80, 255]);
        // Over-range magnitude clamps to white
        assert_eq!(decoded.get_pixel(0, 1).0, [255, 255, 255, 255]);
    }
}
