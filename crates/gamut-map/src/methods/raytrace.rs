//! Chroma reduction by ray casting against the linear RGB cube.
//!
//! A ray is cast in linear RGB from the achromatic anchor (same lightness
//! and hue, zero chroma) through the color. The hit point is pulled back
//! to the original Oklch lightness and hue and the cast is repeated; after
//! a few rounds the point sits on the cube surface at nearly constant
//! lightness and hue.

use gamut_color::{Color, Space};
use gamut_math::Vec3;

use super::{black, white};
use crate::oklab_gamut::OklabGamut;

/// Ray casting rounds.
pub const ROUNDS: usize = 4;

/// Margin the anchor keeps from the cube surface.
pub const ANCHOR_MARGIN: f64 = 1e-6;

/// Slab-method intersection of the ray `start -> end` with the box
/// `[bmin, bmax]`.
///
/// Returns the first hit in the travel direction, or the exit point when
/// `start` is inside the box. `None` when the ray misses, is parallel to
/// a face while outside its slab, or the distance is not finite.
pub fn intersect_box(start: Vec3, end: Vec3, bmin: Vec3, bmax: Vec3) -> Option<Vec3> {
    let mut tfar = f64::INFINITY;
    let mut tnear = f64::NEG_INFINITY;
    let direction = end - start;

    for i in 0..3 {
        let a = start[i];
        let d = direction[i];
        if d != 0.0 {
            let inv_d = 1.0 / d;
            let t1 = (bmin[i] - a) * inv_d;
            let t2 = (bmax[i] - a) * inv_d;
            tnear = tnear.max(t1.min(t2));
            tfar = tfar.min(t1.max(t2));
        } else if a < bmin[i] || a > bmax[i] {
            return None;
        }
    }

    if tnear > tfar || tfar < 0.0 {
        return None;
    }
    if tnear < 0.0 {
        tnear = tfar;
    }
    if !tnear.is_finite() {
        return None;
    }
    Some(start + direction * tnear)
}

/// Maps `color` onto the surface of the gamut of `og`.
pub fn map(color: &Color, og: &OklabGamut) -> Color {
    let gamut = og.gamut();
    if color.in_gamut(gamut, 0.0) {
        return color.to(Space::encoded(gamut));
    }

    let [light, chroma, hue] = color.to(Space::Oklch).coords();
    if light >= 1.0 {
        return white(gamut);
    }
    if light <= 0.0 {
        return black(gamut);
    }
    let hue = if hue.is_nan() { 0.0 } else { hue };

    let mut anchor = og.oklch_to_linear(Vec3::new(light, 0.0, hue));
    let mut mapped = og.oklch_to_linear(Vec3::new(light, chroma, hue));
    let (low, high) = (ANCHOR_MARGIN, 1.0 - ANCHOR_MARGIN);

    for round in 0..ROUNDS {
        if round > 0 {
            let mut lch = og.linear_to_oklch(mapped);
            lch.x = light;
            lch.z = hue;
            mapped = og.oklch_to_linear(lch);
        }
        let current = mapped;
        let hit = intersect_box(anchor, current, Vec3::ZERO, Vec3::ONE);

        if round > 0 && current.min_element() > low && current.max_element() < high {
            anchor = current;
        }

        match hit {
            Some(point) => mapped = point,
            None => break,
        }
    }

    Color::new(Space::linear(gamut), mapped.clamp01().to_array()).to(Space::encoded(gamut))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use gamut_color::Gamut;

    #[test]
    fn test_box_inside_ray_exits_forward() {
        let hit = intersect_box(
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(0.6, 0.5, 0.5),
            Vec3::ZERO,
            Vec3::ONE,
        )
        .unwrap();
        assert_abs_diff_eq!(hit.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_box_outside_endpoint() {
        let hit = intersect_box(
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(0.5, 2.0, -1.0),
            Vec3::ZERO,
            Vec3::ONE,
        )
        .unwrap();
        // z reaches 0 first (t = 1/3), y would reach 1 at t = 1/3 too.
        assert_abs_diff_eq!(hit.z, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_box_parallel_outside_misses() {
        let hit = intersect_box(
            Vec3::new(1.5, 0.5, 0.5),
            Vec3::new(1.5, 0.9, 0.5),
            Vec3::ZERO,
            Vec3::ONE,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_box_pointing_away_misses() {
        let hit = intersect_box(
            Vec3::new(2.0, 0.5, 0.5),
            Vec3::new(3.0, 0.5, 0.5),
            Vec3::ZERO,
            Vec3::ONE,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_box_degenerate_ray_inside() {
        // Zero-length ray inside: all slabs parallel, tnear stays -inf.
        let p = Vec3::splat(0.5);
        assert!(intersect_box(p, p, Vec3::ZERO, Vec3::ONE).is_none());
    }

    #[test]
    fn test_map_lands_on_surface() {
        let og = OklabGamut::new(Gamut::DisplayP3);
        let src = Color::rgb(Gamut::Rec2020, [0.05, 0.95, 0.1]);
        let out = map(&src, &og);
        assert!(out.in_gamut(Gamut::DisplayP3, 0.0));
        let lin = out.to(Space::DisplayP3Linear).coords();
        let on_surface = lin.iter().any(|&v| v < 1e-3 || v > 1.0 - 1e-3);
        assert!(on_surface, "{:?}", lin);

        let (a, b) = (src.to(Space::Oklch).coords(), out.to(Space::Oklch).coords());
        assert_abs_diff_eq!(a[0], b[0], epsilon = 0.02);
        assert_abs_diff_eq!(a[2], b[2], epsilon = 3.0);
    }

    #[test]
    fn test_map_in_gamut_identity() {
        let og = OklabGamut::new(Gamut::Srgb);
        let src = Color::rgb(Gamut::Srgb, [0.4, 0.2, 0.9]);
        assert_eq!(map(&src, &og).coords(), src.coords());
    }
}
