//! Single-file depth conversion and top-level dispatch

use crate::batch::{self, BatchSummary};
use crate::depth::DepthImage;
use crate::error::ConvertError;
use crate::image::{Colormap, render_depth};
use crate::paths::{self, OutputPaths};
use crate::report;
use crate::types::DepthBounds;
use image::{EncodableLayout, ImageBuffer, ImageFormat, PixelWithColorType};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Everything the configurable converter needs besides the input path
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertOptions {
    /// Color output: file or directory
    pub output_path: Option<PathBuf>,
    /// Grayscale output: file or directory
    pub depth_output_path: Option<PathBuf>,
    pub colormap: Colormap,
    pub min_depth: Option<f32>,
    pub max_depth: Option<f32>,
}

impl ConvertOptions {
    /// Reject bounds that are wrong regardless of the image contents
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidBounds`] for non-finite bounds or an
    /// explicit `min > max`
    pub fn validate(&self) -> Result<(), ConvertError> {
        match (self.min_depth, self.max_depth) {
            (Some(min), Some(max)) => DepthBounds::new(min, max).map(|_| ()),
            (Some(v), None) | (None, Some(v)) if !v.is_finite() => {
                Err(ConvertError::InvalidBounds { min: v, max: v })
            }
            _ => Ok(()),
        }
    }
}

/// Convert a single file or every TIFF in a directory
///
/// # Errors
///
/// Returns [`ConvertError::InputNotFound`] if `input` does not exist, or the
/// first error raised while converting
pub fn convert_path(input: &Path, options: &ConvertOptions) -> Result<BatchSummary, ConvertError> {
    if !input.exists() {
        return Err(ConvertError::InputNotFound(input.to_path_buf()));
    }
    options.validate()?;

    if input.is_dir() {
        batch::process_directory(input, options)
    } else {
        let outputs = convert_file(input, options)?;
        Ok(BatchSummary {
            outputs: vec![outputs],
        })
    }
}

/// Read one depth map, render it and write both renditions
///
/// # Errors
///
/// Returns an error if the image cannot be read, the bounds are invalid, or
/// an output cannot be written
pub fn convert_file(input: &Path, options: &ConvertOptions) -> Result<OutputPaths, ConvertError> {
    let depth = DepthImage::open(input)?;
    let bounds = DepthBounds::resolve(options.min_depth, options.max_depth, depth.samples())?;

    debug!(
        path = %input.display(),
        dimensions = %depth.dimensions(),
        bounds = %bounds,
        colormap = %options.colormap,
        "rendering depth map"
    );
    if bounds.is_degenerate() {
        warn!(
            path = %input.display(),
            "depth range is empty ({bounds}), rendering as constant minimum"
        );
    }

    let rendered = render_depth(&depth, bounds, options.colormap);
    let outputs = paths::resolve_output_paths(
        input,
        options.output_path.as_deref(),
        options.depth_output_path.as_deref(),
    );

    write_png(&rendered.color, &outputs.colormap)?;
    write_png(&rendered.grayscale, &outputs.grayscale)?;
    report::print_saved(&outputs);

    Ok(outputs)
}

/// PNG-encode `image` at `path`, creating parent directories first
///
/// # Errors
///
/// Returns [`ConvertError::CreateDir`] or [`ConvertError::Write`]
pub fn write_png<P>(image: &ImageBuffer<P, Vec<P::Subpixel>>, path: &Path) -> Result<(), ConvertError>
where
    P: PixelWithColorType,
    [P::Subpixel]: EncodableLayout,
{
    paths::ensure_parent_dir(path)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| ConvertError::Write {
            path: path.to_path_buf(),
            source,
        })
}
