//! Domain types shared by the depth rendering pipeline

use crate::error::ConvertError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{width}x{height}", width = self.width, height = self.height)
    }
}

/// Depth range used to map raw samples onto [0, 1]
///
/// `min == max` is allowed and marks a degenerate range (constant image);
/// the normalizer maps every sample to 0 in that case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBounds {
    pub min: f32,
    pub max: f32,
}

impl DepthBounds {
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidBounds`] if either bound is not finite
    /// or if `min > max`
    pub fn new(min: f32, max: f32) -> Result<Self, ConvertError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ConvertError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Extrema of the finite samples, or `None` when there are none
    #[must_use]
    pub fn from_samples(samples: &[f32]) -> Option<Self> {
        let (min, max) = crate::image::find_min_max(samples);
        (min <= max).then_some(Self { min, max })
    }

    /// Fill in whichever bound was not given explicitly from the samples
    ///
    /// An image without any finite sample falls back to `(0, 0)`, which the
    /// normalizer treats as degenerate.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidBounds`] if the combined range is
    /// inverted or not finite
    pub fn resolve(
        min: Option<f32>,
        max: Option<f32>,
        samples: &[f32],
    ) -> Result<Self, ConvertError> {
        if let (Some(min), Some(max)) = (min, max) {
            return Self::new(min, max);
        }

        let inferred = Self::from_samples(samples).unwrap_or(Self { min: 0.0, max: 0.0 });
        Self::new(min.unwrap_or(inferred.min), max.unwrap_or(inferred.max))
    }

    /// Width of the range, widened to f64 so `max - min` cannot overflow
    #[inline]
    #[must_use]
    pub fn range(&self) -> f64 {
        f64::from(self.max) - f64::from(self.min)
    }

    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.range() <= 0.0
    }
}

impl fmt::Display for DepthBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{min}, {max}]", min = self.min, max = self.max)
    }
}

/// Which rendition an output file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Colormap,
    Grayscale,
}

impl OutputKind {
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Colormap => "colormap",
            Self::Grayscale => "grayscale",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
