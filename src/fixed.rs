//! Fixed-colormap converter
//!
//! Every file in the source directory is read as 8-bit grayscale, colorized
//! over the full byte range and written as `<index>.png`. Numbering follows
//! the sorted file order.

use crate::batch;
use crate::convert::write_png;
use crate::depth::DepthImage;
use crate::error::ConvertError;
use crate::image::{Colormap, colorize, normalize};
use crate::paths;
use crate::report;
use crate::types::DepthBounds;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const SOURCE_DIR: &str = "depth/scr";
pub const OUTPUT_DIR: &str = "depth/output";
pub const FIXED_COLORMAP: Colormap = Colormap::Plasma;

/// 8-bit samples span the whole byte range
const BYTE_BOUNDS: DepthBounds = DepthBounds {
    min: 0.0,
    max: 255.0,
};

/// Colorize every file in `src_dir` into `dst_dir/<index>.png`
///
/// # Errors
///
/// Returns [`ConvertError::InputNotFound`] if `src_dir` is missing, or the
/// first error raised while reading or writing a file
pub fn convert_fixed(
    src_dir: &Path,
    dst_dir: &Path,
    colormap: Colormap,
) -> Result<Vec<PathBuf>, ConvertError> {
    if !src_dir.is_dir() {
        return Err(ConvertError::InputNotFound(src_dir.to_path_buf()));
    }
    paths::ensure_dir(dst_dir)?;

    let files = batch::list_files(src_dir)?;
    debug!(count = files.len(), source = %src_dir.display(), "fixed conversion");

    let mut written = Vec::with_capacity(files.len());
    for (idx, file) in files.iter().enumerate() {
        let depth = DepthImage::open_luma8(file)?;
        let color = colorize(&normalize(&depth, BYTE_BOUNDS), colormap);

        let target = dst_dir.join(format!("{idx}.png"));
        write_png(&color, &target)?;
        report::print_path("Saved", &target);
        written.push(target);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use image::{GrayImage, Luma};
    use std::fs;

    #[test]
    fn test_outputs_are_numbered_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("scr");
        let dst = dir.path().join("output");
        fs::create_dir(&src).unwrap();
        GrayImage::from_pixel(3, 2, Luma([0])).save(src.join("a.png")).unwrap();
        GrayImage::from_pixel(3, 2, Luma([255])).save(src.join("b.png")).unwrap();

        let written = convert_fixed(&src, &dst, Colormap::Plasma).unwrap();
        assert_eq!(written, vec![dst.join("0.png"), dst.join("1.png")]);

        let lut = Colormap::Plasma.lut();
        let first = image::open(&written[0]).unwrap().to_rgb8();
        let second = image::open(&written[1]).unwrap().to_rgb8();
        assert_eq!(first.dimensions(), (3, 2));
        assert_eq!(first.get_pixel(0, 0).0, lut.lookup(0.0));
        assert_eq!(second.get_pixel(2, 1).0, lut.lookup(1.0));
    }

    #[test]
    fn test_missing_source_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_matches!(
            convert_fixed(&dir.path().join("scr"), &dir.path().join("out"), FIXED_COLORMAP),
            Err(ConvertError::InputNotFound(_))
        );
    }

    #[test]
    fn test_empty_source_creates_destination() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("output");

        let written = convert_fixed(dir.path(), &dst, FIXED_COLORMAP).unwrap();
        assert!(written.is_empty());
        assert!(dst.is_dir());
    }
}
