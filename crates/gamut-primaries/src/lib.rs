//! # gamut-primaries
//!
//! RGB primaries, gamut identifiers and RGB-XYZ matrix generation.
//!
//! Three D65 gamuts are known: sRGB, Display P3 and Rec.2020. They are the
//! display targets and the wide reference gamut of the comparison harness.
//!
//! # Usage
//!
//! ```rust
//! use gamut_primaries::Gamut;
//! use gamut_math::Vec3;
//!
//! let m = Gamut::DisplayP3.matrices();
//! let xyz = m.rgb_to_xyz * Vec3::ONE;
//! assert!((xyz.y - 1.0).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - `gamut-math` - Matrix operations
//! - [`serde`] - Gamut names in sweep configuration
//!
//! # Used By
//!
//! - `gamut-color` - Linear RGB <-> XYZ conversion
//! - `gamut-map` - Per-gamut Oklab matrices
//! - `gamut-compare` - Sweep targets

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use gamut_math::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

/// CIE xy chromaticities of a gamut's primaries and white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red.
    pub r: (f64, f64),
    /// Green.
    pub g: (f64, f64),
    /// Blue.
    pub b: (f64, f64),
    /// White.
    pub w: (f64, f64),
    /// Human readable name.
    pub name: &'static str,
}

impl Primaries {
    /// XYZ of the white, normalized to `Y = 1`.
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        chromaticity_to_xyz(self.w)
    }

    /// Unscaled XYZ of the three primaries, `Y = 1` each.
    fn rgb_xyz(&self) -> [Vec3; 3] {
        [self.r, self.g, self.b].map(chromaticity_to_xyz)
    }
}

// ============================================================================
// Standard Primaries
// ============================================================================

/// D65 white point chromaticity.
pub const D65_XY: (f64, f64) = (0.3127, 0.3290);

/// sRGB, also Rec.709.
pub const SRGB: Primaries = Primaries {
    r: (0.640, 0.330),
    g: (0.300, 0.600),
    b: (0.150, 0.060),
    w: D65_XY,
    name: "sRGB",
};

/// Display P3: DCI-P3 primaries with a D65 white.
pub const DISPLAY_P3: Primaries = Primaries {
    r: (0.680, 0.320),
    g: (0.265, 0.690),
    b: (0.150, 0.060),
    w: D65_XY,
    name: "Display P3",
};

/// ITU-R BT.2020.
pub const REC2020: Primaries = Primaries {
    r: (0.708, 0.292),
    g: (0.170, 0.797),
    b: (0.131, 0.046),
    w: D65_XY,
    name: "Rec.2020",
};

// ============================================================================
// Gamut identifiers
// ============================================================================

/// A named RGB gamut.
///
/// Ordered from narrowest to widest. Serialized in kebab-case
/// (`"srgb"`, `"display-p3"`, `"rec2020"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gamut {
    /// sRGB
    #[serde(alias = "sRGB")]
    Srgb,
    /// Display P3
    #[serde(alias = "p3")]
    DisplayP3,
    /// Rec.2020 (ITU-R BT.2020)
    #[serde(alias = "rec-2020")]
    Rec2020,
}

impl Gamut {
    /// All gamuts, narrowest first.
    pub const ALL: [Gamut; 3] = [Gamut::Srgb, Gamut::DisplayP3, Gamut::Rec2020];

    /// Chromaticities of this gamut.
    pub const fn primaries(self) -> &'static Primaries {
        match self {
            Gamut::Srgb => &SRGB,
            Gamut::DisplayP3 => &DISPLAY_P3,
            Gamut::Rec2020 => &REC2020,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        self.primaries().name
    }

    /// Short suffix used in result keys (`"Srgb"`, `"P3"`, `"Rec2020"`).
    pub const fn key_suffix(self) -> &'static str {
        match self {
            Gamut::Srgb => "Srgb",
            Gamut::DisplayP3 => "P3",
            Gamut::Rec2020 => "Rec2020",
        }
    }

    /// Cached RGB <-> XYZ matrices for this gamut.
    ///
    /// Built on first access and kept for the process lifetime.
    pub fn matrices(self) -> &'static GamutMatrices {
        static CACHE: [OnceLock<GamutMatrices>; 3] = [OnceLock::new(), OnceLock::new(), OnceLock::new()];
        let slot = match self {
            Gamut::Srgb => &CACHE[0],
            Gamut::DisplayP3 => &CACHE[1],
            Gamut::Rec2020 => &CACHE[2],
        };
        slot.get_or_init(|| GamutMatrices::new(self.primaries()))
    }
}

impl fmt::Display for Gamut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown gamut name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gamut: {0} (expected srgb, p3 or rec2020)")]
pub struct UnknownGamut(pub String);

impl FromStr for Gamut {
    type Err = UnknownGamut;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['_', '.', ' '], "-").as_str() {
            "srgb" => Ok(Gamut::Srgb),
            "p3" | "display-p3" | "displayp3" => Ok(Gamut::DisplayP3),
            "rec2020" | "rec-2020" | "bt2020" => Ok(Gamut::Rec2020),
            _ => Err(UnknownGamut(s.to_string())),
        }
    }
}

// ============================================================================
// Matrix Generation
// ============================================================================

/// Linear RGB <-> XYZ (D65) matrix pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutMatrices {
    /// Linear RGB to XYZ.
    pub rgb_to_xyz: Mat3,
    /// XYZ to linear RGB.
    pub xyz_to_rgb: Mat3,
}

impl GamutMatrices {
    /// Derives both matrices from chromaticities.
    pub fn new(primaries: &Primaries) -> Self {
        Self {
            rgb_to_xyz: rgb_to_xyz_matrix(primaries),
            xyz_to_rgb: xyz_to_rgb_matrix(primaries),
        }
    }
}

fn chromaticity_to_xyz((x, y): (f64, f64)) -> Vec3 {
    if y.abs() < 1e-12 {
        return Vec3::ZERO;
    }
    Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
}

/// Linear RGB to XYZ for `primaries`.
///
/// Each primary's XYZ is weighted so that RGB `(1, 1, 1)` lands exactly
/// on the white point.
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let [r, g, b] = primaries.rgb_xyz();
    let unscaled = Mat3::from_col_vecs(r, g, b);
    let weights = match unscaled.inverse() {
        Some(inv) => inv * primaries.white_xyz(),
        None => return Mat3::IDENTITY,
    };
    Mat3::from_col_vecs(r * weights.x, g * weights.y, b * weights.z)
}

/// XYZ to linear RGB for `primaries`.
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    match rgb_to_xyz_matrix(primaries).inverse() {
        Some(m) => m,
        None => Mat3::IDENTITY,
    }
}

/// Matrix from linear `src` RGB to linear `dst` RGB through XYZ.
///
/// All gamuts share D65, so no adaptation is needed.
pub fn rgb_to_rgb_matrix(src: Gamut, dst: Gamut) -> Mat3 {
    dst.matrices().xyz_to_rgb * src.matrices().rgb_to_xyz
}
