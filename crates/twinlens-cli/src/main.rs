use clap::{Parser, Subcommand};
use std::path::PathBuf;
use twinlens_cli::{cmd_analyze, cmd_compare};

#[derive(Parser)]
#[command(name = "twinlens")]
#[command(version, about = "Deterministic two-image comparison analyzer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two images: metrics, classification, similarity, summary
    Compare {
        /// First input image (PNG, JPEG, or WebP)
        #[arg(value_name = "IMAGE1")]
        image1: PathBuf,

        /// Second input image (PNG, JPEG, or WebP)
        #[arg(value_name = "IMAGE2")]
        image2: PathBuf,

        /// Output directory for preview images
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Skip writing grayscale/edge-map preview PNGs
        #[arg(long)]
        no_previews: bool,

        /// Enable debug output showing intermediate metrics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a single image without comparison
    Analyze {
        /// Input image (PNG, JPEG, or WebP)
        #[arg(value_name = "IMAGE")]
        input: PathBuf,

        /// Output directory for preview images
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Skip writing grayscale/edge-map preview PNGs
        #[arg(long)]
        no_previews: bool,

        /// Enable debug output showing intermediate metrics
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare {
            image1,
            image2,
            out,
            json,
            no_previews,
            verbose,
        } => cmd_compare(image1, image2, out, json, no_previews, verbose),

        Commands::Analyze {
            input,
            out,
            json,
            no_previews,
            verbose,
        } => cmd_analyze(input, out, json, no_previews, verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
