use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use depthcmap::cli::{Args, rewrite_legacy_flags};
use depthcmap::image::Colormap;
use depthcmap::{convert_path, setup_logging};
use std::path::Path;
use tracing::debug;

fn main() {
    let args = Args::parse_from(rewrite_legacy_flags(std::env::args_os()));
    setup_logging(args.verbose);

    if args.list_colormaps {
        for colormap in Colormap::ALL {
            println!("{colormap}");
        }
        return;
    }

    let Some(input) = args.input_path.as_deref() else {
        let _ = Args::command().print_help();
        println!();
        return;
    };

    if let Err(e) = run(&args, input) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args, input: &Path) -> Result<()> {
    // Colormap and bounds are checked before any file is touched
    let options = args.to_options().context("Invalid arguments")?;

    let summary = convert_path(input, &options)?;
    debug!(processed = summary.processed(), "conversion complete");

    Ok(())
}
