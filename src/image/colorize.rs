use super::colormap::Colormap;
use super::normalization::NormalizedField;
use image::{Rgb, RgbImage};

/// Map every normalized value through `colormap`, producing an opaque RGB image
#[must_use]
pub fn colorize(field: &NormalizedField, colormap: Colormap) -> RgbImage {
    let lut = colormap.lut();
    let dims = field.dimensions();
    let mut rgb = RgbImage::new(dims.width, dims.height);

    for (pixel, &value) in rgb.pixels_mut().zip(field.values()) {
        *pixel = Rgb(lut.lookup(value));
    }

    rgb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth::DepthImage;
    use crate::image::normalize;
    use crate::types::{DepthBounds, Dimensions};

    #[test]
    fn test_colorize_uses_lut_endpoints() {
        let depth = DepthImage::new(Dimensions::new(2, 2), vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        let field = normalize(&depth, DepthBounds::new(0.0, 1.0).unwrap());
        let rgb = colorize(&field, Colormap::Jet);
        let lut = Colormap::Jet.lut();

        assert_eq!(rgb.dimensions(), (2, 2));
        assert_eq!(rgb.get_pixel(0, 0).0, lut.lookup(0.0));
        assert_eq!(rgb.get_pixel(1, 0).0, lut.lookup(1.0));
        assert_eq!(rgb.get_pixel(0, 1).0, lut.lookup(1.0));
        assert_eq!(rgb.get_pixel(1, 1).0, lut.lookup(0.0));
    }

    #[test]
    fn test_gray_colormap_matches_grayscale_at_ends() {
        let depth = DepthImage::new(Dimensions::new(2, 1), vec![10.0, 20.0]).unwrap();
        let field = normalize(&depth, DepthBounds::new(10.0, 20.0).unwrap());
        let rgb = colorize(&field, Colormap::Gray);

        assert_eq!(rgb.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(rgb.get_pixel(1, 0).0, [255, 255, 255]);
    }
}
