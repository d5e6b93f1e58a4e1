//! The `compare` command: analyze two images and report their similarity.

use std::path::PathBuf;

use crate::{file_prefix, print_image_report, read_image_bytes, write_previews};

/// Execute the compare command.
///
/// Decodes and analyzes both inputs, prints the per-image metrics, the
/// similarity score, and the generated summary (or the whole result as
/// JSON), and writes the four preview PNGs unless suppressed.
pub fn cmd_compare(
    image1: PathBuf,
    image2: PathBuf,
    out: Option<PathBuf>,
    json_output: bool,
    no_previews: bool,
    verbose: bool,
) -> Result<(), String> {
    twinlens_core::config::set_verbose(verbose);

    let bytes1 = read_image_bytes(&image1)?;
    let bytes2 = read_image_bytes(&image2)?;

    let result = twinlens_core::analyze_pair(&bytes1, &bytes2).map_err(|e| e.to_string())?;

    if json_output {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("Failed to serialize result: {}", e))?;
        println!("{}", json);
    } else {
        print_image_report("Image 1", &image1, &result.image1);
        println!();
        print_image_report("Image 2", &image2, &result.image2);
        println!();
        println!("Similarity score: {}%", result.similarity_score);
        println!();
        println!("{}", result.summary);
    }

    if !no_previews {
        let out_dir = out.unwrap_or_else(|| PathBuf::from("."));
        let mut written = Vec::new();

        // Fixed slot prefixes so two inputs with the same file stem cannot
        // overwrite each other's previews
        let prefix1 = format!("image1_{}", file_prefix(&image1));
        let prefix2 = format!("image2_{}", file_prefix(&image2));
        written.extend(write_previews(&out_dir, &prefix1, &result.image1)?);
        written.extend(write_previews(&out_dir, &prefix2, &result.image2)?);

        if !json_output {
            println!();
            for path in written {
                println!("Wrote {}", path.display());
            }
        }
    }

    Ok(())
}
