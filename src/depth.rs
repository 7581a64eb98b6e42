//! Depth image loading
//!
//! Depth maps arrive as 8-bit or 16-bit single-channel PNG/TIFF files. Integer
//! grayscale samples keep their raw value so explicit depth bounds can be given
//! in the same units the upstream tool wrote. Color inputs are reduced to luma.

use crate::error::ConvertError;
use crate::types::Dimensions;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Row-major grid of raw depth samples
#[derive(Debug, Clone, PartialEq)]
pub struct DepthImage {
    dimensions: Dimensions,
    samples: Vec<f32>,
}

impl DepthImage {
    /// Returns `None` if `samples` does not hold exactly one value per pixel
    #[must_use]
    pub fn new(dimensions: Dimensions, samples: Vec<f32>) -> Option<Self> {
        (samples.len() == dimensions.pixel_count()).then_some(Self {
            dimensions,
            samples,
        })
    }

    /// Decode a depth map, guessing the format from the file contents
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Read`] if the file cannot be opened or decoded
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        decode(path).map(Self::from_dynamic)
    }

    /// Decode any raster and keep only its 8-bit luma channel
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Read`] if the file cannot be opened or decoded
    pub fn open_luma8(path: &Path) -> Result<Self, ConvertError> {
        let luma = decode(path)?.to_luma8();
        let dimensions = Dimensions::new(luma.width(), luma.height());
        let samples = luma.into_raw().into_iter().map(f32::from).collect();
        Ok(Self {
            dimensions,
            samples,
        })
    }

    #[must_use]
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let dimensions = Dimensions::new(image.width(), image.height());

        let samples: Vec<f32> = match image {
            DynamicImage::ImageLuma8(buf) => buf.into_raw().into_iter().map(f32::from).collect(),
            DynamicImage::ImageLuma16(buf) => buf.into_raw().into_iter().map(f32::from).collect(),
            DynamicImage::ImageLumaA8(_) | DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => {
                image.to_luma8().into_raw().into_iter().map(f32::from).collect()
            }
            DynamicImage::ImageLumaA16(_) | DynamicImage::ImageRgb16(_) | DynamicImage::ImageRgba16(_) => {
                image.to_luma16().into_raw().into_iter().map(f32::from).collect()
            }
            other => other.to_luma32f().into_raw(),
        };

        Self {
            dimensions,
            samples,
        }
    }

    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[inline]
    #[must_use]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}

fn decode(path: &Path) -> Result<DynamicImage, ConvertError> {
    let read_error = |source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    };

    ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| read_error(image::ImageError::IoError(e)))?
        .decode()
        .map_err(read_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage};

    #[test]
    fn test_new_checks_sample_count() {
        assert!(DepthImage::new(Dimensions::new(2, 2), vec![0.0; 4]).is_some());
        assert!(DepthImage::new(Dimensions::new(2, 2), vec![0.0; 3]).is_none());
    }

    #[test]
    fn test_sixteen_bit_tiff_keeps_raw_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("depth.tif");
        let buf: ImageBuffer<Luma<u16>, Vec<u16>> =
            ImageBuffer::from_fn(3, 2, |x, y| Luma([1000 + (y * 3 + x) as u16 * 10_000]));
        buf.save(&path).unwrap();

        let depth = DepthImage::open(&path).unwrap();
        assert_eq!(depth.dimensions(), Dimensions::new(3, 2));
        assert_eq!(depth.samples()[0], 1000.0);
        assert_eq!(depth.samples()[5], 51_000.0);
    }

    #[test]
    fn test_eight_bit_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("depth.png");
        GrayImage::from_fn(4, 1, |x, _| Luma([x as u8 * 60])).save(&path).unwrap();

        let depth = DepthImage::open(&path).unwrap();
        assert_eq!(depth.samples(), &[0.0, 60.0, 120.0, 180.0]);
    }

    #[test]
    fn test_rgb_input_is_reduced_to_luma() {
        let depth = DepthImage::from_dynamic(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            2,
            2,
            Rgb([200, 200, 200]),
        )));
        assert_eq!(depth.dimensions(), Dimensions::new(2, 2));
        assert!(depth.samples().iter().all(|&v| v == 200.0));
    }

    #[test]
    fn test_open_luma8_from_sixteen_bit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("depth.png");
        let buf: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_pixel(2, 2, Luma([u16::MAX]));
        buf.save(&path).unwrap();

        let depth = DepthImage::open_luma8(&path).unwrap();
        assert!(depth.samples().iter().all(|&v| v == 255.0));
    }

    #[test]
    fn test_unreadable_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.tif");
        std::fs::write(&path, b"definitely not a tiff").unwrap();

        assert_matches!(DepthImage::open(&path), Err(ConvertError::Read { .. }));
        assert_matches!(
            DepthImage::open(&dir.path().join("missing.tif")),
            Err(ConvertError::Read { .. })
        );
    }
}
