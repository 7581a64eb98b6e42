use crate::depth::DepthImage;
use crate::types::{DepthBounds, Dimensions};

/// Extrema of the finite values, `(INFINITY, NEG_INFINITY)` when there are none
#[inline]
#[must_use]
pub fn find_min_max(values: &[f32]) -> (f32, f32) {
    values
        .iter()
        .filter(|val| val.is_finite())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &val| {
            (min.min(val), max.max(val))
        })
}

/// Map one raw sample onto [0, 1]
///
/// A non-positive `range` (constant image) and non-finite samples both map to 0.
/// Arithmetic runs in f64 so `max - min` cannot overflow for wide f32 bounds.
#[inline]
#[must_use]
pub fn normalize_sample(value: f32, min: f64, range: f64) -> f32 {
    if range <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    ((f64::from(value) - min) / range).clamp(0.0, 1.0) as f32
}

/// Depth samples rescaled to [0, 1], same layout as the source image
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedField {
    dimensions: Dimensions,
    values: Vec<f32>,
}

impl NormalizedField {
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

/// Clip and rescale `depth` into [0, 1] using `bounds`
#[must_use]
pub fn normalize(depth: &DepthImage, bounds: DepthBounds) -> NormalizedField {
    let min = f64::from(bounds.min);
    let range = bounds.range();

    let values = depth
        .samples()
        .iter()
        .map(|&value| normalize_sample(value, min, range))
        .collect();

    NormalizedField {
        dimensions: depth.dimensions(),
        values,
    }
}
