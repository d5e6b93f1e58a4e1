//! Tests for decoding and size normalization

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use super::*;

/// Encode a solid-color RGBA image as PNG bytes
fn png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(color));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

#[test]
fn test_decode_empty_input() {
    let result = decode_image(&[]);
    assert!(matches!(result, Err(DecodeError::EmptyInput)));
}

#[test]
fn test_decode_garbage_input() {
    let result = decode_image(b"definitely not an image");
    assert!(matches!(result, Err(DecodeError::InvalidImage(_))));
}

#[test]
fn test_decode_truncated_png() {
    let mut bytes = png_bytes(10, 10, [100, 150, 200, 255]);
    bytes.truncate(bytes.len() / 2);
    assert!(decode_image(&bytes).is_err());
}

#[test]
fn test_small_image_passes_through_unscaled() {
    let bytes = png_bytes(2, 2, [10, 20, 30, 255]);
    let decoded = decode_image(&bytes).unwrap();

    assert_eq!(decoded.width, 2);
    assert_eq!(decoded.height, 2);
    assert_eq!(decoded.data.len(), 2 * 2 * 4);
    assert_eq!(&decoded.data[..4], &[10, 20, 30, 255]);
}

#[test]
fn test_wide_image_downscaled_to_cap() {
    let bytes = png_bytes(800, 600, [50, 50, 50, 255]);
    let decoded = decode_image(&bytes).unwrap();

    assert_eq!(decoded.width, 400);
    assert_eq!(decoded.height, 300);
    assert_eq!(decoded.data.len(), 400 * 300 * 4);
}

#[test]
fn test_downscale_truncates_fractional_height() {
    // 601 * 400 / 800 = 300.5, truncated to 300
    let bytes = png_bytes(800, 601, [0, 0, 0, 255]);
    let decoded = decode_image(&bytes).unwrap();

    assert_eq!(decoded.width, 400);
    assert_eq!(decoded.height, 300);
}

#[test]
fn test_exact_cap_width_is_not_scaled() {
    let bytes = png_bytes(MAX_WIDTH, 10, [1, 2, 3, 255]);
    let decoded = decode_image(&bytes).unwrap();

    assert_eq!(decoded.width, MAX_WIDTH);
    assert_eq!(decoded.height, 10);
}

#[test]
fn test_tall_narrow_image_is_never_upsized() {
    // The scale factor is width-based; a narrow-but-tall image stays as-is.
    let bytes = png_bytes(50, 900, [0, 0, 0, 255]);
    let decoded = decode_image(&bytes).unwrap();

    assert_eq!(decoded.width, 50);
    assert_eq!(decoded.height, 900);
}

#[test]
fn test_downscale_preserves_solid_color() {
    let bytes = png_bytes(1000, 500, [120, 60, 30, 255]);
    let decoded = decode_image(&bytes).unwrap();

    assert_eq!((decoded.width, decoded.height), (400, 200));
    for rgba in decoded.data.chunks_exact(4) {
        assert_eq!(rgba, &[120, 60, 30, 255]);
    }
}

#[test]
fn test_decode_jpeg_bytes() {
    let img = RgbaImage::from_pixel(8, 8, Rgba([200, 100, 50, 255]));
    let rgb = image::DynamicImage::ImageRgba8(img).to_rgb8();
    let mut bytes = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .unwrap();

    let decoded = decode_image(&bytes).unwrap();
    assert_eq!((decoded.width, decoded.height), (8, 8));
}
