//! Sobel edge detection.

use super::grayscale::GrayscaleBuffer;
use super::stats::round2;

/// Gradient magnitude above this value counts a pixel as an edge.
/// Calibrated heuristic; the classifier depends on it staying fixed.
pub const EDGE_THRESHOLD: f64 = 80.0;

/// Per-pixel gradient magnitudes. Border pixels are excluded from the
/// computation and stay zero.
#[derive(Debug, Clone)]
pub struct GradientBuffer {
    pub width: u32,
    pub height: u32,

    /// `width * height` magnitudes; clamped to 8-bit range only when rendered
    pub data: Vec<f32>,
}

/// Edge detector output: the gradient map plus the edge statistics.
#[derive(Debug, Clone)]
pub struct EdgeAnalysis {
    pub gradient: GradientBuffer,

    /// Number of interior pixels over the edge threshold
    pub edge_count: usize,

    /// `100 * edge_count / (width * height)`, rounded to 2 decimals.
    /// The denominator is the total pixel count, so the maximum density is
    /// strictly below 100 for any finite border.
    pub edge_density: f64,
}

/// Apply the 3x3 Sobel operator to the grayscale buffer.
///
/// Interior pixels only (`1 <= x < w-1`, `1 <= y < h-1`); images smaller
/// than 3x3 have no interior and produce zero edges rather than an error.
pub fn detect_edges(gray: &GrayscaleBuffer) -> EdgeAnalysis {
    let width = gray.width as usize;
    let height = gray.height as usize;
    let mut magnitudes = vec![0.0f32; width * height];
    let mut edge_count = 0usize;

    if width >= 3 && height >= 3 {
        let px = |x: usize, y: usize| gray.data[y * width + x] as i32;

        for y in 1..height - 1 {
            for x in 1..width - 1 {
                // Gx: [-1 0 1; -2 0 2; -1 0 1], Gy: [-1 -2 -1; 0 0 0; 1 2 1]
                let gx = -px(x - 1, y - 1) + px(x + 1, y - 1) - 2 * px(x - 1, y)
                    + 2 * px(x + 1, y)
                    - px(x - 1, y + 1)
                    + px(x + 1, y + 1);
                let gy = -px(x - 1, y - 1) - 2 * px(x, y - 1) - px(x + 1, y - 1)
                    + px(x - 1, y + 1)
                    + 2 * px(x, y + 1)
                    + px(x + 1, y + 1);

                let magnitude = ((gx * gx + gy * gy) as f64).sqrt();
                if magnitude > EDGE_THRESHOLD {
                    edge_count += 1;
                }
                magnitudes[y * width + x] = magnitude as f32;
            }
        }
    }

    let total = (width * height) as f64;
    let edge_density = if total > 0.0 {
        round2(edge_count as f64 / total * 100.0)
    } else {
        0.0
    };

    EdgeAnalysis {
        gradient: GradientBuffer {
            width: gray.width,
            height: gray.height,
            data: magnitudes,
        },
        edge_count,
        edge_density,
    }
}
