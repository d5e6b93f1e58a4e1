//! Shared utilities for twinlens-cli
//!
//! Reusable helpers for reading inputs, writing preview images, and
//! printing per-image reports, shared by the CLI subcommands.

pub mod commands;

use std::path::{Path, PathBuf};

use twinlens_core::AnalyzedImage;

// Re-export commonly used items at the crate root for convenience
pub use commands::{cmd_analyze, cmd_compare};

/// Read an input image file into memory.
pub fn read_image_bytes(path: &Path) -> Result<Vec<u8>, String> {
    std::fs::read(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))
}

/// Write the grayscale and edge-map previews for one analyzed image.
///
/// Files are named `<prefix>_grayscale.png` and `<prefix>_edges.png` inside
/// `out_dir`. Returns the written paths.
pub fn write_previews(
    out_dir: &Path,
    prefix: &str,
    analyzed: &AnalyzedImage,
) -> Result<Vec<PathBuf>, String> {
    std::fs::create_dir_all(out_dir)
        .map_err(|e| format!("Failed to create output directory: {}", e))?;

    let grayscale_path = out_dir.join(format!("{}_grayscale.png", prefix));
    let edges_path = out_dir.join(format!("{}_edges.png", prefix));

    std::fs::write(&grayscale_path, &analyzed.grayscale_png)
        .map_err(|e| format!("Failed to write {}: {}", grayscale_path.display(), e))?;
    std::fs::write(&edges_path, &analyzed.edges_png)
        .map_err(|e| format!("Failed to write {}: {}", edges_path.display(), e))?;

    Ok(vec![grayscale_path, edges_path])
}

/// File stem of an input path, for naming preview files.
pub fn file_prefix(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image")
        .to_string()
}

/// Print the human-readable report block for one analyzed image.
pub fn print_image_report(heading: &str, path: &Path, analyzed: &AnalyzedImage) {
    println!("{}: {}", heading, path.display());
    println!("  Classification: {}", analyzed.classification);
    println!("  Brightness:     {:.2}", analyzed.metrics.brightness);
    println!("  Contrast:       {:.2}", analyzed.metrics.contrast);
    println!("  Edge density:   {:.2}%", analyzed.metrics.edge_density);
    if analyzed.metrics.is_low_contrast {
        println!("  Warning:        low contrast");
    }
}
