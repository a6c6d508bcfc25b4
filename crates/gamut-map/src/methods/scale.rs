//! Midpoint scaling in linear light.
//!
//! Linear channels are shifted to `[-0.5, 0.5]`, divided by the largest
//! absolute deviation (relative to 0.5), and shifted back. All three
//! channels shrink by the same factor, so nothing is hard clipped.

use gamut_color::{Color, Gamut, Space};

const MIDPOINT: f64 = 0.5;

/// Scales `color` into `gamut` around the linear midpoint.
///
/// The factor never drops below 1: in-gamut colors are returned as is.
pub fn map(color: &Color, gamut: Gamut) -> Color {
    let linear = color.to(Space::linear(gamut));
    let deltas = linear.coords().map(|c| c - MIDPOINT);
    let max_distance = deltas.iter().fold(0.0_f64, |m, d| m.max(d.abs()));
    let factor = (max_distance / MIDPOINT).max(1.0);
    let scaled = deltas.map(|d| d / factor + MIDPOINT);
    linear.with_coords(scaled).to(Space::encoded(gamut))
}

/// Runs [`map`], restores the original Oklch lightness and hue, then runs
/// [`map`] again.
pub fn map_lh(color: &Color, gamut: Gamut) -> Color {
    let [l, _, h] = color.to(Space::Oklch).coords();
    let mut lch = map(color, gamut).to(Space::Oklch).coords();
    lch[0] = l;
    if !h.is_nan() {
        lch[2] = h;
    }
    map(&Color::new(Space::Oklch, lch), gamut)
}
