//! Chromium's baked-in gamut mapper.
//!
//! The Rec.2020 gamut surface is approximated in Oklab by twelve planes:
//! for each of the six hue sectors between a primary and a secondary
//! (YR, RM, MB, BC, CG, GY), one plane through white and one through
//! black. Sector selection is a sign test of `(a, b)` against six
//! precomputed normals. The `(a, b)` vector is then attenuated so the
//! color lands on the nearer plane, and a final clip removes the error of
//! the approximation.

use gamut_color::{Color, Gamut, Space, DEFAULT_GAMUT_EPSILON};

type V2 = [f64; 2];

/// Plane constants for one hue sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    /// Sector name, e.g. `"YR"`.
    pub name: &'static str,
    /// Shared plane offset.
    pub c0: f64,
    /// White-side plane coefficients.
    pub cw: V2,
    /// Black-side plane coefficients.
    pub ck: V2,
}

// Normals of the planes through white, black and each vertex.
const NORMAL_R: V2 = [0.409702, -0.912219];
const NORMAL_M: V2 = [-0.397919, -0.917421];
const NORMAL_B: V2 = [-0.906800, 0.421562];
const NORMAL_C: V2 = [-0.171122, 0.985250];
const NORMAL_G: V2 = [0.460276, 0.887776];
const NORMAL_Y: V2 = [0.947925, 0.318495];

const YR: Sector = Sector { name: "YR", c0: 0.091132, cw: [0.070370, 0.034139], ck: [0.018170, 0.378550] };
const RM: Sector = Sector { name: "RM", c0: 0.113902, cw: [0.090836, 0.036251], ck: [0.226781, 0.018764] };
const MB: Sector = Sector { name: "MB", c0: 0.161739, cw: [-0.008202, -0.264819], ck: [0.187156, -0.284304] };
const BC: Sector = Sector { name: "BC", c0: 0.102047, cw: [-0.014804, -0.162608], ck: [-0.276786, 0.004193] };
const CG: Sector = Sector { name: "CG", c0: 0.092029, cw: [-0.038533, -0.001650], ck: [-0.232572, -0.094331] };
const GY: Sector = Sector { name: "GY", c0: 0.081709, cw: [-0.034601, -0.002215], ck: [0.012185, 0.338031] };

#[inline]
fn dot(a: V2, b: V2) -> f64 {
    a[0] * b[0] + a[1] * b[1]
}

/// Picks the hue sector of an Oklab `(a, b)` vector.
pub fn sector(ab: V2) -> &'static Sector {
    if dot(ab, NORMAL_R) < 0.0 {
        if dot(ab, NORMAL_G) < 0.0 {
            if dot(ab, NORMAL_C) < 0.0 { &BC } else { &CG }
        } else if dot(ab, NORMAL_Y) < 0.0 {
            &GY
        } else {
            &YR
        }
    } else if dot(ab, NORMAL_B) < 0.0 {
        if dot(ab, NORMAL_M) < 0.0 { &RM } else { &MB }
    } else {
        &BC
    }
}

/// Attenuation factor in `(0, 1]` for `(a, b)` at lightness `l`.
pub fn attenuation(l: f64, ab: V2) -> f64 {
    let s = sector(ab);
    let mut alpha: f64 = 1.0;

    let w_denom = dot(s.cw, ab);
    if w_denom > 0.0 {
        let w_num = s.c0 * (1.0 - l);
        if w_num < w_denom {
            alpha = alpha.min(w_num / w_denom);
        }
    }

    let k_denom = dot(s.ck, ab);
    if k_denom > 0.0 {
        let k_num = s.c0 * l;
        if k_num < k_denom {
            alpha = alpha.min(k_num / k_denom);
        }
    }
    alpha
}

/// Maps `color` toward the approximate Rec.2020 surface, then clips into
/// `display`.
///
/// Colors already inside Rec.2020 are returned converted but unclipped.
pub fn map(color: &Color, display: Gamut) -> Color {
    if color.in_gamut(Gamut::Rec2020, DEFAULT_GAMUT_EPSILON) {
        return color.to(Space::encoded(display));
    }
    let [l, a, b] = color.to(Space::Oklab).coords();
    let alpha = attenuation(l, [a, b]);
    Color::oklab(l, alpha * a, alpha * b).clip(display)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ab(h_deg: f64) -> V2 {
        let h = h_deg.to_radians();
        [h.cos(), h.sin()]
    }

    #[test]
    fn test_sector_of_primaries() {
        let hue = |rgb: [f64; 3]| Color::rgb(Gamut::Rec2020, rgb).to(Space::Oklch).coords()[2];
        // Hue 15 degrees past each vertex, going counter-clockwise in (a, b).
        assert_eq!(sector(ab(hue([1.0, 0.0, 0.0]) + 15.0)).name, "YR");
        assert_eq!(sector(ab(hue([0.0, 1.0, 0.0]) + 15.0)).name, "CG");
        assert_eq!(sector(ab(hue([0.0, 0.0, 1.0]) + 15.0)).name, "MB");
    }

    #[test]
    fn test_attenuation_bounded() {
        for h in (0..360).step_by(15) {
            for l in [0.1, 0.5, 0.9] {
                let v = ab(h as f64);
                let alpha = attenuation(l, [v[0] * 0.5, v[1] * 0.5]);
                assert!(alpha > 0.0 && alpha <= 1.0, "h={} l={} alpha={}", h, l, alpha);
            }
        }
    }

    #[test]
    fn test_small_chroma_not_attenuated() {
        assert_eq!(attenuation(0.5, [0.001, 0.001]), 1.0);
    }

    #[test]
    fn test_in_rec2020_passthrough() {
        let c = Color::rgb(Gamut::Rec2020, [0.1, 0.9, 0.2]);
        let out = map(&c, Gamut::DisplayP3);
        let expected = c.to(Space::DisplayP3).coords();
        assert_eq!(out.coords(), expected);
    }

    #[test]
    fn test_out_of_gamut_clipped() {
        let c = Color::xyz(0.0, 1.0, 0.0);
        assert!(!c.in_gamut(Gamut::Rec2020, 0.0));
        let out = map(&c, Gamut::Srgb);
        assert!(out.in_gamut(Gamut::Srgb, 0.0));
    }
}
