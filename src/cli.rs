use crate::convert::ConvertOptions;
use crate::error::ConvertError;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Convert depth maps into colormap and grayscale visualizations
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Depth map file, or a directory of TIFF depth maps; help is shown without one
    #[arg(value_name = "INPUT")]
    pub input_path: Option<PathBuf>,

    /// Colormap output file or directory
    #[arg(short = 'o', long = "output_path", visible_alias = "output-path")]
    pub output_path: Option<PathBuf>,

    /// Grayscale output file or directory
    #[arg(short = 'd', long = "depth_output_path", visible_alias = "depth-output-path")]
    pub depth_output_path: Option<PathBuf>,

    /// Colormap name, e.g. jet, plasma, viridis
    #[arg(short, long, default_value = "jet")]
    pub colormap: String,

    /// Depth mapped to the start of the colormap (default: image minimum)
    #[arg(long = "min_depth", visible_alias = "min-depth", value_name = "DEPTH", allow_negative_numbers = true)]
    pub min_depth: Option<f32>,

    /// Depth mapped to the end of the colormap (default: image maximum)
    #[arg(long = "max_depth", visible_alias = "max-depth", value_name = "DEPTH", allow_negative_numbers = true)]
    pub max_depth: Option<f32>,

    /// Print the available colormaps and exit
    #[arg(long)]
    pub list_colormaps: bool,

    /// Log per-file statistics
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// # Errors
    ///
    /// Returns [`ConvertError::UnknownColormap`] or [`ConvertError::InvalidBounds`]
    pub fn to_options(&self) -> Result<ConvertOptions, ConvertError> {
        let options = ConvertOptions {
            output_path: self.output_path.clone(),
            depth_output_path: self.depth_output_path.clone(),
            colormap: self.colormap.parse()?,
            min_depth: self.min_depth,
            max_depth: self.max_depth,
        };
        options.validate()?;
        Ok(options)
    }
}

/// Accept the single-dash `-min` / `-max` spellings by mapping them to long flags
pub fn rewrite_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-min") => OsString::from("--min_depth"),
            Some("-max") => OsString::from("--max_depth"),
            _ => arg,
        })
        .collect()
}
