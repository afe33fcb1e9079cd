//! Appicon CLI - generate iOS and Android app-icon sets
//!
//! Usage: appicon -s <source image> -o <output directory>
//!
//! Produces every icon variant from the built-in manifest under
//! `<output>/ios` and `<output>/android`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use appicon::generate::generate;
use appicon::manifest::Platform;
use appicon::request::GenerationRequest;

/// Appicon - generate iOS and Android app-icon sets from one square image
#[derive(Parser, Debug)]
#[command(name = "appicon")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source image file (square PNG or JPEG)
    #[arg(short, long)]
    source: PathBuf,

    /// Output root directory
    #[arg(short, long)]
    output: PathBuf,

    /// Apply rounded corners to the source before resizing
    #[arg(short, long)]
    round: bool,

    /// Base file name for generated Android assets
    #[arg(short = 'i', long, default_value = "icon")]
    android_icon: String,

    /// Permit clearing a pre-existing per-platform output directory
    #[arg(short, long)]
    force: bool,

    /// Platforms to generate for (comma-separated: ios,android)
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = ["ios".to_string(), "android".to_string()]
    )]
    targets: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let platforms = Platform::parse_list(&cli.targets)?;

    let request = GenerationRequest {
        source: cli.source,
        output_root: cli.output,
        platforms,
        force: cli.force,
        round_corners: cli.round,
        android_icon: cli.android_icon,
    };

    println!("🖼  Appicon");
    println!("Source: {}", request.source.display());
    println!("Output: {}", request.output_root.display());
    if request.round_corners {
        println!("Option: Rounded corners");
    }
    if request.force {
        println!("Option: Force overwrite");
    }
    println!();

    let report = generate(&request).await?;

    println!("\n📊 Results:");
    println!("  ✓ Written: {} files", report.written.len());
    if !report.is_success() {
        println!("  ✗ Errors: {}", report.errors.len());
        for (path, message) in &report.errors {
            eprintln!("    - {}: {}", path.display(), message);
        }
        std::process::exit(1);
    }

    Ok(())
}
