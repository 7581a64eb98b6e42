//! Colorize every depth map in `depth/scr` into `depth/output` with plasma

use anyhow::{Context, Result};
use depthcmap::fixed::{FIXED_COLORMAP, OUTPUT_DIR, SOURCE_DIR, convert_fixed};
use depthcmap::setup_logging;
use std::path::Path;

fn main() {
    setup_logging(false);

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let written = convert_fixed(Path::new(SOURCE_DIR), Path::new(OUTPUT_DIR), FIXED_COLORMAP)
        .with_context(|| format!("Failed to convert depth maps from {SOURCE_DIR}"))?;
    println!("Converted {} files into {OUTPUT_DIR}", written.len());
    Ok(())
}
