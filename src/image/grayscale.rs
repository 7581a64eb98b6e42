//! Neutral 8-bit rendition of a normalized depth field

use super::normalization::NormalizedField;
use image::{GrayImage, Luma};

/// Scale a [0, 1] value to a byte, truncating like an unsigned cast
#[inline]
#[must_use]
pub fn unit_to_u8(value: f32) -> u8 {
    // Saturating cast: anything outside [0, 255] is clamped by `as`
    (value * 255.0_f32) as u8
}

/// Render the normalized field as a single-channel image (0 = min, 255 = max)
#[must_use]
pub fn render_grayscale(field: &NormalizedField) -> GrayImage {
    let dims = field.dimensions();
    let mut gray = GrayImage::new(dims.width, dims.height);

    for (pixel, &value) in gray.pixels_mut().zip(field.values()) {
        *pixel = Luma([unit_to_u8(value)]);
    }

    gray
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth::DepthImage;
    use crate::image::normalize;
    use crate::types::{DepthBounds, Dimensions};

    #[test]
    fn test_unit_to_u8_truncates() {
        assert_eq!(unit_to_u8(0.0), 0);
        assert_eq!(unit_to_u8(0.5), 127);
        assert_eq!(unit_to_u8(1.0), 255);
        assert_eq!(unit_to_u8(1.5), 255);
        assert_eq!(unit_to_u8(-0.1), 0);
    }

    #[test]
    fn test_render_grayscale_layout() {
        let depth = DepthImage::new(Dimensions::new(3, 2), vec![0.0, 50.0, 100.0, 100.0, 50.0, 0.0])
            .unwrap();
        let field = normalize(&depth, DepthBounds::new(0.0, 100.0).unwrap());
        let gray = render_grayscale(&field);

        assert_eq!(gray.dimensions(), (3, 2));
        assert_eq!(gray.get_pixel(0, 0).0, [0]);
        assert_eq!(gray.get_pixel(1, 0).0, [127]);
        assert_eq!(gray.get_pixel(2, 0).0, [255]);
        assert_eq!(gray.get_pixel(0, 1).0, [255]);
        assert_eq!(gray.get_pixel(2, 1).0, [0]);
    }
}
