//! Depth normalization and rendering
//!
//! Raw depth samples are rescaled to [0, 1] by the normalizer, then rendered
//! twice: once through a colormap and once as a plain 8-bit grayscale ramp.

mod colorize;
mod colormap;
mod grayscale;
mod normalization;

pub use colorize::colorize;
pub use colormap::{Colormap, ColormapLut, LUT_SIZE};
pub use grayscale::{render_grayscale, unit_to_u8};
pub use normalization::{NormalizedField, find_min_max, normalize, normalize_sample};

use crate::depth::DepthImage;
use crate::types::DepthBounds;
use image::{GrayImage, RgbImage};

/// Both renditions of one depth image
#[derive(Debug, Clone)]
pub struct RenderedDepth {
    pub bounds: DepthBounds,
    pub color: RgbImage,
    pub grayscale: GrayImage,
}

/// Normalize `depth` against `bounds` and render the color and grayscale images
#[must_use]
pub fn render_depth(depth: &DepthImage, bounds: DepthBounds, colormap: Colormap) -> RenderedDepth {
    let field = normalize(depth, bounds);

    RenderedDepth {
        bounds,
        color: colorize(&field, colormap),
        grayscale: render_grayscale(&field),
    }
}
