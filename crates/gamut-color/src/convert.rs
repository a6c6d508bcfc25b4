//! Coordinate conversion between [`Space`]s.
//!
//! Everything routes through XYZ-D65 except the cheap direct paths
//! (Oklab <-> Oklch, and encoded <-> linear within one gamut), which
//! skip the matrix roundtrip.

use gamut_math::Vec3;
use gamut_primaries::Gamut;
use gamut_transfer::{rec2020, srgb};

use crate::lab;
use crate::oklab;
use crate::space::Space;

/// Converts coordinates from one space to another.
pub fn convert(coords: [f64; 3], from: Space, to: Space) -> [f64; 3] {
    if from == to {
        return coords;
    }
    let v = Vec3::from_array(coords);
    let out = match (from, to) {
        (Space::Oklab, Space::Oklch) => oklab::oklab_to_oklch(v),
        (Space::Oklch, Space::Oklab) => oklab::oklch_to_oklab(v),
        _ => match (from.gamut(), to.gamut()) {
            (Some(a), Some(b)) if a == b => {
                if from.is_linear() {
                    encode(a, v)
                } else {
                    decode(a, v)
                }
            }
            _ => from_xyz(to, to_xyz(from, v)),
        },
    };
    out.to_array()
}

/// Converts coordinates in `space` to XYZ-D65.
pub fn to_xyz(space: Space, v: Vec3) -> Vec3 {
    match space {
        Space::XyzD65 => v,
        Space::XyzD50 => lab::xyz_d50_to_d65(v),
        Space::Lab => lab::xyz_d50_to_d65(lab::lab_to_xyz_d50(v)),
        Space::Oklab => oklab::oklab_to_xyz(v),
        Space::Oklch => oklab::oklab_to_xyz(oklab::oklch_to_oklab(v)),
        rgb => {
            let gamut = gamut_of(rgb);
            let linear = if rgb.is_linear() { v } else { decode(gamut, v) };
            gamut.matrices().rgb_to_xyz * linear
        }
    }
}

/// Converts XYZ-D65 to coordinates in `space`.
pub fn from_xyz(space: Space, xyz: Vec3) -> Vec3 {
    match space {
        Space::XyzD65 => xyz,
        Space::XyzD50 => lab::xyz_d65_to_d50(xyz),
        Space::Lab => lab::xyz_d50_to_lab(lab::xyz_d65_to_d50(xyz)),
        Space::Oklab => oklab::xyz_to_oklab(xyz),
        Space::Oklch => oklab::oklab_to_oklch(oklab::xyz_to_oklab(xyz)),
        rgb => {
            let gamut = gamut_of(rgb);
            let linear = gamut.matrices().xyz_to_rgb * xyz;
            if rgb.is_linear() { linear } else { encode(gamut, linear) }
        }
    }
}

/// Linear-light to encoded RGB for a gamut.
#[inline]
pub fn encode(gamut: Gamut, linear: Vec3) -> Vec3 {
    match gamut {
        Gamut::Srgb | Gamut::DisplayP3 => linear.map(srgb::oetf),
        Gamut::Rec2020 => linear.map(rec2020::oetf),
    }
}

/// Encoded to linear-light RGB for a gamut.
#[inline]
pub fn decode(gamut: Gamut, encoded: Vec3) -> Vec3 {
    match gamut {
        Gamut::Srgb | Gamut::DisplayP3 => encoded.map(srgb::eotf),
        Gamut::Rec2020 => encoded.map(rec2020::eotf),
    }
}

// Only called on the RGB arms of the matches above.
fn gamut_of(space: Space) -> Gamut {
    space.gamut().unwrap_or(Gamut::Srgb)
}
