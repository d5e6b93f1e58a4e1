//! The `analyze` command: metrics and classification for a single image.

use std::path::{Path, PathBuf};

use serde::Serialize;
use twinlens_core::{AnalyzedImage, Classification, Metrics};

use crate::{file_prefix, print_image_report, read_image_bytes, write_previews};

/// Single-image report for JSON output.
#[derive(Serialize)]
struct ImageReport {
    file: String,
    metrics: Metrics,
    classification: Classification,
}

impl ImageReport {
    fn new(file: &Path, analyzed: &AnalyzedImage) -> Self {
        Self {
            file: file.display().to_string(),
            metrics: analyzed.metrics,
            classification: analyzed.classification,
        }
    }
}

/// Execute the analyze command: one image through the per-image half of the
/// pipeline, no comparison.
pub fn cmd_analyze(
    input: PathBuf,
    out: Option<PathBuf>,
    json_output: bool,
    no_previews: bool,
    verbose: bool,
) -> Result<(), String> {
    twinlens_core::config::set_verbose(verbose);

    let bytes = read_image_bytes(&input)?;
    let analyzed = twinlens_core::analyze_image(&bytes).map_err(|e| e.to_string())?;

    if json_output {
        let report = ImageReport::new(&input, &analyzed);
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize report: {}", e))?;
        println!("{}", json);
    } else {
        print_image_report("Image", &input, &analyzed);
    }

    if !no_previews {
        let out_dir = out.unwrap_or_else(|| PathBuf::from("."));
        let written = write_previews(&out_dir, &file_prefix(&input), &analyzed)?;
        if !json_output {
            println!();
            for path in written {
                println!("Wrote {}", path.display());
            }
        }
    }

    Ok(())
}
