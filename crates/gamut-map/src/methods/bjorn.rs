//! Ottosson's Oklab gamut clipping, projected at constant lightness.
//!
//! Reference: <https://bottosson.github.io/posts/gamutclipping/>

use gamut_color::{Color, Gamut, Space};

use crate::oklab_gamut::OklabGamut;

/// Floor for the chroma before normalizing `(a, b)`.
///
/// Ottosson uses `0.00001`; `0.0` keeps exact grays untouched.
pub const CHROMA_EPSILON: f64 = 0.0;

/// Maps `color` into the gamut of `og` by reducing chroma toward the
/// neutral axis at the same lightness, then clips the residual error.
pub fn map(color: &Color, og: &OklabGamut) -> Color {
    let gamut: Gamut = og.gamut();
    let [l, a, b] = color.to(Space::Oklab).coords();
    let l = l.clamp(0.0, 1.0);
    let clamped = Color::oklab(l, a, b);
    if clamped.in_gamut(gamut, 0.0) {
        return clamped.to(Space::encoded(gamut));
    }

    let c = CHROMA_EPSILON.max(a.hypot(b));
    if c == 0.0 {
        return clamped.clip(gamut);
    }
    let (a_, b_) = (a / c, b / c);

    let cusp = og.find_cusp(a_, b_);
    let t = og.find_gamut_intersection(a_, b_, l, c, l, cusp);
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

    let c = c * t;
    Color::oklab(l, c * a_, c * b_).clip(gamut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_in_gamut_identity() {
        let og = OklabGamut::new(Gamut::DisplayP3);
        let c = Color::rgb(Gamut::DisplayP3, [0.3, 0.7, 0.2]);
        let out = map(&c, &og).coords();
        for (a, b) in out.iter().zip(c.coords()) {
            assert_abs_diff_eq!(*a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_keeps_lightness_and_hue() {
        let og = OklabGamut::new(Gamut::Srgb);
        let src = Color::oklch(0.6, 0.35, 200.0);
        let out = map(&src, &og);
        assert!(out.in_gamut(Gamut::Srgb, 0.0));
        let lch = out.to(Space::Oklch).coords();
        assert_abs_diff_eq!(lch[0], 0.6, epsilon = 0.01);
        assert_abs_diff_eq!(lch[2], 200.0, epsilon = 1.0);
        assert!(lch[1] < 0.35);
    }

    #[test]
    fn test_lightness_clamped() {
        let og = OklabGamut::new(Gamut::DisplayP3);
        let out = map(&Color::oklch(1.3, 0.2, 90.0), &og);
        assert!(out.in_gamut(Gamut::DisplayP3, 0.0));
        let l = out.to(Space::Oklch).coords()[0];
        assert_abs_diff_eq!(l, 1.0, epsilon = 1e-6);
    }
}
