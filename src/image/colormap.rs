//! Colormap palettes and the 256-entry lookup table used for rendering
//!
//! `jet`, `hot`, `cool`, `gray` and `bone` are defined by per-channel
//! piecewise-linear segments, the same way matplotlib specifies them.
//! The perceptually uniform maps are approximated by evenly spaced color
//! stops with linear interpolation in between. Table entries are truncated
//! to bytes, the same way the grayscale rendition is.

use crate::error::ConvertError;
use crate::image::unit_to_u8;
use std::fmt;
use std::str::FromStr;

/// Number of entries in a discretized colormap
pub const LUT_SIZE: usize = 256;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Colormap {
    #[default]
    Jet,
    Hot,
    Cool,
    Gray,
    Bone,
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    Turbo,
}

impl Colormap {
    pub const ALL: &[Colormap] = &[
        Self::Jet,
        Self::Hot,
        Self::Cool,
        Self::Gray,
        Self::Bone,
        Self::Viridis,
        Self::Plasma,
        Self::Inferno,
        Self::Magma,
        Self::Cividis,
        Self::Turbo,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Jet => "jet",
            Self::Hot => "hot",
            Self::Cool => "cool",
            Self::Gray => "gray",
            Self::Bone => "bone",
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Inferno => "inferno",
            Self::Magma => "magma",
            Self::Cividis => "cividis",
            Self::Turbo => "turbo",
        }
    }

    /// Comma separated list of every colormap name
    #[must_use]
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|cmap| cmap.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Continuous color at `t`, channels in [0, 1]; `t` is clamped to [0, 1]
    #[must_use]
    pub fn evaluate(self, t: f32) -> [f32; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self.gradient() {
            Gradient::Segments { red, green, blue } => [
                interpolate_segments(red, t),
                interpolate_segments(green, t),
                interpolate_segments(blue, t),
            ],
            Gradient::Stops(stops) => interpolate_stops(stops, t).map(|c| c / 255.0),
        }
    }

    #[must_use]
    pub fn lut(self) -> ColormapLut {
        ColormapLut::new(self)
    }

    fn gradient(self) -> Gradient {
        match self {
            Self::Jet => Gradient::Segments {
                red: JET_RED,
                green: JET_GREEN,
                blue: JET_BLUE,
            },
            Self::Hot => Gradient::Segments {
                red: HOT_RED,
                green: HOT_GREEN,
                blue: HOT_BLUE,
            },
            Self::Cool => Gradient::Segments {
                red: RAMP_UP,
                green: RAMP_DOWN,
                blue: CONSTANT_ONE,
            },
            Self::Gray => Gradient::Segments {
                red: RAMP_UP,
                green: RAMP_UP,
                blue: RAMP_UP,
            },
            Self::Bone => Gradient::Segments {
                red: BONE_RED,
                green: BONE_GREEN,
                blue: BONE_BLUE,
            },
            Self::Viridis => Gradient::Stops(VIRIDIS),
            Self::Plasma => Gradient::Stops(PLASMA),
            Self::Inferno => Gradient::Stops(INFERNO),
            Self::Magma => Gradient::Stops(MAGMA),
            Self::Cividis => Gradient::Stops(CIVIDIS),
            Self::Turbo => Gradient::Stops(TURBO),
        }
    }
}

impl FromStr for Colormap {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted == "grey" {
            return Ok(Self::Gray);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|cmap| cmap.name() == wanted)
            .ok_or_else(|| ConvertError::UnknownColormap {
                name: s.to_string(),
                available: Self::available(),
            })
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A colormap discretized to [`LUT_SIZE`] RGB byte triples
#[derive(Clone)]
pub struct ColormapLut {
    entries: [[u8; 3]; LUT_SIZE],
}

impl ColormapLut {
    #[must_use]
    pub fn new(colormap: Colormap) -> Self {
        let mut entries = [[0u8; 3]; LUT_SIZE];
        for (i, entry) in entries.iter_mut().enumerate() {
            let t = i as f32 / (LUT_SIZE - 1) as f32;
            // Channels truncate like the grayscale rendition; stops stay in
            // byte space so each palette stop lands on its exact value
            *entry = match colormap.gradient() {
                Gradient::Segments { .. } => colormap.evaluate(t).map(unit_to_u8),
                Gradient::Stops(stops) => interpolate_stops(stops, t).map(|c| c as u8),
            };
        }
        Self { entries }
    }

    /// Color for a normalized value; 1.0 selects the last entry
    #[inline]
    #[must_use]
    pub fn lookup(&self, t: f32) -> [u8; 3] {
        // NaN casts to 0, values past the end saturate onto the last entry
        let index = ((t * LUT_SIZE as f32) as usize).min(LUT_SIZE - 1);
        self.entries[index]
    }
}

impl fmt::Debug for ColormapLut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColormapLut")
            .field("first", &self.entries[0])
            .field("last", &self.entries[LUT_SIZE - 1])
            .finish()
    }
}

enum Gradient {
    Segments {
        red: &'static [Anchor],
        green: &'static [Anchor],
        blue: &'static [Anchor],
    },
    Stops(&'static [[u8; 3]]),
}

/// Channel intensity `y` at position `x`, both in [0, 1]
#[derive(Debug, Clone, Copy)]
struct Anchor {
    x: f32,
    y: f32,
}

const fn anchor(x: f32, y: f32) -> Anchor {
    Anchor { x, y }
}

const fn hex(rgb: u32) -> [u8; 3] {
    [(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8]
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn interpolate_segments(anchors: &[Anchor], t: f32) -> f32 {
    let first = anchors[0];
    if t <= first.x {
        return first.y;
    }
    for pair in anchors.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if t <= hi.x {
            return lerp(lo.y, hi.y, (t - lo.x) / (hi.x - lo.x));
        }
    }
    anchors[anchors.len() - 1].y
}

/// Byte-valued color between the two stops surrounding `t`
fn interpolate_stops(stops: &[[u8; 3]], t: f32) -> [f32; 3] {
    let scaled = t * (stops.len() - 1) as f32;
    let lower = (scaled.floor() as usize).min(stops.len() - 2);
    let frac = scaled - lower as f32;

    let (a, b) = (stops[lower], stops[lower + 1]);
    let channel = |i: usize| lerp(f32::from(a[i]), f32::from(b[i]), frac);
    [channel(0), channel(1), channel(2)]
}

// ─── Segment tables ────────────────────────────────────────────────────

const JET_RED: &[Anchor] = &[
    anchor(0.0, 0.0),
    anchor(0.35, 0.0),
    anchor(0.66, 1.0),
    anchor(0.89, 1.0),
    anchor(1.0, 0.5),
];
const JET_GREEN: &[Anchor] = &[
    anchor(0.0, 0.0),
    anchor(0.125, 0.0),
    anchor(0.375, 1.0),
    anchor(0.64, 1.0),
    anchor(0.91, 0.0),
    anchor(1.0, 0.0),
];
const JET_BLUE: &[Anchor] = &[
    anchor(0.0, 0.5),
    anchor(0.11, 1.0),
    anchor(0.34, 1.0),
    anchor(0.65, 0.0),
    anchor(1.0, 0.0),
];

const HOT_RED: &[Anchor] = &[
    anchor(0.0, 0.0416),
    anchor(0.365079, 1.0),
    anchor(1.0, 1.0),
];
const HOT_GREEN: &[Anchor] = &[
    anchor(0.0, 0.0),
    anchor(0.365079, 0.0),
    anchor(0.746032, 1.0),
    anchor(1.0, 1.0),
];
const HOT_BLUE: &[Anchor] = &[anchor(0.0, 0.0), anchor(0.746032, 0.0), anchor(1.0, 1.0)];

const BONE_RED: &[Anchor] = &[
    anchor(0.0, 0.0),
    anchor(0.746032, 0.652778),
    anchor(1.0, 1.0),
];
const BONE_GREEN: &[Anchor] = &[
    anchor(0.0, 0.0),
    anchor(0.365079, 0.319444),
    anchor(0.746032, 0.777778),
    anchor(1.0, 1.0),
];
const BONE_BLUE: &[Anchor] = &[
    anchor(0.0, 0.0),
    anchor(0.365079, 0.444444),
    anchor(1.0, 1.0),
];

const RAMP_UP: &[Anchor] = &[anchor(0.0, 0.0), anchor(1.0, 1.0)];
const RAMP_DOWN: &[Anchor] = &[anchor(0.0, 1.0), anchor(1.0, 0.0)];
const CONSTANT_ONE: &[Anchor] = &[anchor(0.0, 1.0), anchor(1.0, 1.0)];

// ─── Evenly spaced stops ───────────────────────────────────────────────

const VIRIDIS: &[[u8; 3]] = &[
    hex(0x440154),
    hex(0x472d7b),
    hex(0x3b528b),
    hex(0x2c728e),
    hex(0x21918c),
    hex(0x28ae80),
    hex(0x5ec962),
    hex(0xaddc30),
    hex(0xfde725),
];

const PLASMA: &[[u8; 3]] = &[
    hex(0x0d0887),
    hex(0x4c02a1),
    hex(0x7e03a8),
    hex(0xa92395),
    hex(0xcc4778),
    hex(0xe56b5d),
    hex(0xf89540),
    hex(0xfdc527),
    hex(0xf0f921),
];

const INFERNO: &[[u8; 3]] = &[
    hex(0x000004),
    hex(0x1f0c48),
    hex(0x550f6d),
    hex(0x88226a),
    hex(0xba3655),
    hex(0xe35933),
    hex(0xf98e09),
    hex(0xf9cb35),
    hex(0xfcffa4),
];

const MAGMA: &[[u8; 3]] = &[
    hex(0x000004),
    hex(0x1c1044),
    hex(0x4f127b),
    hex(0x812581),
    hex(0xb5367a),
    hex(0xe55064),
    hex(0xfb8761),
    hex(0xfec287),
    hex(0xfcfdbf),
];

const CIVIDIS: &[[u8; 3]] = &[
    hex(0x00224e),
    hex(0x123570),
    hex(0x3b496c),
    hex(0x575d6d),
    hex(0x707173),
    hex(0x8a8779),
    hex(0xa69d75),
    hex(0xc4b56c),
    hex(0xe4cf5b),
    hex(0xfee838),
];

const TURBO: &[[u8; 3]] = &[
    hex(0x30123b),
    hex(0x4145ab),
    hex(0x4675ed),
    hex(0x39a2fc),
    hex(0x1bcfd4),
    hex(0x24eca6),
    hex(0x61fc6c),
    hex(0xa4fc3b),
    hex(0xd1e834),
    hex(0xf3c63a),
    hex(0xfe9b2d),
    hex(0xf36315),
    hex(0xd93806),
    hex(0xb11901),
    hex(0x7a0402),
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("jet".parse::<Colormap>().unwrap(), Colormap::Jet);
        assert_eq!("Viridis".parse::<Colormap>().unwrap(), Colormap::Viridis);
        assert_eq!(" PLASMA ".parse::<Colormap>().unwrap(), Colormap::Plasma);
        assert_eq!("grey".parse::<Colormap>().unwrap(), Colormap::Gray);
    }

    #[test]
    fn test_parse_unknown_lists_available() {
        let err = "rainbowish".parse::<Colormap>().unwrap_err();
        assert_matches!(&err, ConvertError::UnknownColormap { name, .. } if name == "rainbowish");
        assert!(err.to_string().contains("viridis"));
    }

    #[test]
    fn test_every_name_round_trips() {
        for &cmap in Colormap::ALL {
            assert_eq!(cmap.name().parse::<Colormap>().unwrap(), cmap);
        }
    }

    #[test]
    fn test_jet_endpoints() {
        let [r, g, b] = Colormap::Jet.evaluate(0.0);
        assert_abs_diff_eq!(r, 0.0);
        assert_abs_diff_eq!(g, 0.0);
        assert_abs_diff_eq!(b, 0.5);

        let [r, g, b] = Colormap::Jet.evaluate(1.0);
        assert_abs_diff_eq!(r, 0.5);
        assert_abs_diff_eq!(g, 0.0);
        assert_abs_diff_eq!(b, 0.0);

        // Green plateau in the middle of the map
        let mid = Colormap::Jet.evaluate(0.5);
        assert_abs_diff_eq!(mid[1], 1.0);
    }

    #[test]
    fn test_stops_hit_palette_ends() {
        assert_eq!(Colormap::Viridis.lut().lookup(0.0), [0x44, 0x01, 0x54]);
        assert_eq!(Colormap::Viridis.lut().lookup(1.0), [0xfd, 0xe7, 0x25]);
        assert_eq!(Colormap::Plasma.lut().lookup(0.0), [0x0d, 0x08, 0x87]);
    }

    #[test]
    fn test_gray_lut_is_identity() {
        let lut = Colormap::Gray.lut();
        for i in 0..LUT_SIZE {
            let t = i as f32 / LUT_SIZE as f32;
            assert_eq!(lut.lookup(t), [i as u8; 3]);
        }
    }

    #[test]
    fn test_lookup_clamps_out_of_range() {
        let lut = Colormap::Jet.lut();
        assert_eq!(lut.lookup(-3.0), lut.lookup(0.0));
        assert_eq!(lut.lookup(7.0), lut.lookup(1.0));
        assert_eq!(lut.lookup(f32::NAN), lut.lookup(0.0));
        assert_eq!(lut.lookup(1.0), [127, 0, 0]);
        assert_eq!(lut.lookup(0.0), [0, 0, 127]);
    }

    #[test]
    fn test_lut_channels_truncate() {
        // hot starts at red 0.0416, i.e. 10.6 levels
        assert_eq!(Colormap::Hot.lut().lookup(0.0), [10, 0, 0]);
        assert_eq!(Colormap::Hot.lut().lookup(1.0), [255, 255, 255]);

        let lut = Colormap::Jet.lut();
        for i in 0..LUT_SIZE {
            let t = i as f32 / (LUT_SIZE - 1) as f32;
            let expected = Colormap::Jet.evaluate(t).map(unit_to_u8);
            assert_eq!(lut.lookup(i as f32 / LUT_SIZE as f32), expected, "entry {i}");
        }
    }

    #[test]
    fn test_evaluate_stays_in_unit_range() {
        for &cmap in Colormap::ALL {
            for i in 0..=100 {
                let rgb = cmap.evaluate(i as f32 / 100.0);
                assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)), "{cmap} at {i}");
            }
        }
    }
}
