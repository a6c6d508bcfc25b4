//! Color space identifiers.

use std::fmt;
use std::str::FromStr;

use gamut_primaries::Gamut;

use crate::error::ColorError;

/// A color space a [`Color`](crate::Color) can be tagged with.
///
/// | Space | Coordinates | White |
/// |-------|-------------|-------|
/// | `XyzD65` | X, Y, Z (Y=1 white) | D65 |
/// | `XyzD50` | X, Y, Z | D50 |
/// | `Lab` | L [0,100], a, b | D50 |
/// | `Oklab` | L [0,1], a, b | D65 |
/// | `Oklch` | L [0,1], C, h (degrees, NaN when achromatic) | D65 |
/// | RGB spaces | R, G, B, [0,1] when in gamut | D65 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    /// CIE XYZ, D65 white. The conversion hub.
    XyzD65,
    /// CIE XYZ, D50 white.
    XyzD50,
    /// CIE L*a*b*, D50 white.
    Lab,
    /// Oklab.
    Oklab,
    /// Oklch, cylindrical Oklab.
    Oklch,
    /// sRGB, encoded.
    Srgb,
    /// sRGB, linear light.
    SrgbLinear,
    /// Display P3, encoded.
    DisplayP3,
    /// Display P3, linear light.
    DisplayP3Linear,
    /// Rec.2020, encoded.
    Rec2020,
    /// Rec.2020, linear light.
    Rec2020Linear,
}

impl Space {
    /// Every known space.
    pub const ALL: [Space; 11] = [
        Space::XyzD65,
        Space::XyzD50,
        Space::Lab,
        Space::Oklab,
        Space::Oklch,
        Space::Srgb,
        Space::SrgbLinear,
        Space::DisplayP3,
        Space::DisplayP3Linear,
        Space::Rec2020,
        Space::Rec2020Linear,
    ];

    /// Encoded RGB space of a gamut.
    pub const fn encoded(gamut: Gamut) -> Self {
        match gamut {
            Gamut::Srgb => Space::Srgb,
            Gamut::DisplayP3 => Space::DisplayP3,
            Gamut::Rec2020 => Space::Rec2020,
        }
    }

    /// Linear-light RGB space of a gamut.
    pub const fn linear(gamut: Gamut) -> Self {
        match gamut {
            Gamut::Srgb => Space::SrgbLinear,
            Gamut::DisplayP3 => Space::DisplayP3Linear,
            Gamut::Rec2020 => Space::Rec2020Linear,
        }
    }

    /// Gamut of an RGB space, `None` for XYZ and Lab-like spaces.
    pub const fn gamut(self) -> Option<Gamut> {
        match self {
            Space::Srgb | Space::SrgbLinear => Some(Gamut::Srgb),
            Space::DisplayP3 | Space::DisplayP3Linear => Some(Gamut::DisplayP3),
            Space::Rec2020 | Space::Rec2020Linear => Some(Gamut::Rec2020),
            _ => None,
        }
    }

    /// True for linear-light RGB spaces.
    pub const fn is_linear(self) -> bool {
        matches!(self, Space::SrgbLinear | Space::DisplayP3Linear | Space::Rec2020Linear)
    }

    /// Index of the hue coordinate, if the space is cylindrical.
    pub const fn hue_index(self) -> Option<usize> {
        match self {
            Space::Oklch => Some(2),
            _ => None,
        }
    }

    /// Short identifier, also accepted by [`FromStr`].
    pub const fn id(self) -> &'static str {
        match self {
            Space::XyzD65 => "xyz-d65",
            Space::XyzD50 => "xyz-d50",
            Space::Lab => "lab",
            Space::Oklab => "oklab",
            Space::Oklch => "oklch",
            Space::Srgb => "srgb",
            Space::SrgbLinear => "srgb-linear",
            Space::DisplayP3 => "p3",
            Space::DisplayP3Linear => "p3-linear",
            Space::Rec2020 => "rec2020",
            Space::Rec2020Linear => "rec2020-linear",
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Space {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        let space = match key.as_str() {
            "xyz" | "xyz-d65" => Space::XyzD65,
            "xyz-d50" => Space::XyzD50,
            "lab" | "lab-d50" => Space::Lab,
            "oklab" => Space::Oklab,
            "oklch" => Space::Oklch,
            "srgb" => Space::Srgb,
            "srgb-linear" => Space::SrgbLinear,
            "p3" | "display-p3" => Space::DisplayP3,
            "p3-linear" | "display-p3-linear" => Space::DisplayP3Linear,
            "rec2020" | "rec-2020" => Space::Rec2020,
            "rec2020-linear" => Space::Rec2020Linear,
            _ => return Err(ColorError::UnknownSpace(s.to_string())),
        };
        Ok(space)
    }
}
