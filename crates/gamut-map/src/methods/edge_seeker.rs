//! Chroma capping with a precomputed [`EdgeTable`].

use gamut_color::{Color, Gamut, Space};

use crate::edge_table::EdgeTable;

/// Caps Oklch chroma at the table's boundary for the color's lightness and
/// hue, then clips into `clip_to`.
///
/// Colors already inside `clip_to` are returned unchanged: the table is a
/// bucketed approximation and can sit slightly inside the true surface.
/// Lightness at or beyond 0 or 1 maps to black or white.
pub fn map(color: &Color, table: &EdgeTable, clip_to: Gamut) -> Color {
    if color.in_gamut(clip_to, 0.0) {
        return color.to(Space::encoded(clip_to));
    }
    let [l, c, h] = color.to(Space::Oklch).coords();
    if l <= 0.0 {
        return Color::oklch(0.0, 0.0, h).clip(clip_to);
    }
    if l >= 1.0 {
        return Color::oklch(1.0, 0.0, h).clip(clip_to);
    }
    let max_chroma = table.max_chroma(l, if h.is_nan() { 0.0 } else { h });
    let c = c.min(max_chroma);
    Color::oklch(l, c, h).clip(clip_to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::MethodContext;
    use approx::assert_abs_diff_eq;

    /// Largest chroma shortfall tolerated between surface samples.
    const RESOLUTION: f64 = 0.02;

    #[test]
    fn test_surface_between_samples_within_resolution() {
        let ctx = MethodContext::new();
        let table = ctx.edge_table(Gamut::DisplayP3);
        // 97 and the 0.37 offset keep every sample off the i / 255 build lattice.
        let n = 97;
        let mut worst = 0.0_f64;
        for i in 0..n {
            for j in 0..n {
                let (u, v) = ((i as f64 + 0.37) / n as f64, (j as f64 + 0.37) / n as f64);
                for fixed in [0.0, 1.0] {
                    for rgb in [[fixed, u, v], [u, fixed, v], [u, v, fixed]] {
                        let [l, c, h] = Color::rgb(Gamut::DisplayP3, rgb).to(Space::Oklch).coords();
                        if h.is_nan() {
                            continue;
                        }
                        worst = worst.max(c - table.max_chroma(l, h));
                    }
                }
            }
        }
        assert!(worst < RESOLUTION, "worst shortfall {worst}");
    }

    #[test]
    fn test_surface_color_near_white_preserved() {
        let ctx = MethodContext::new();
        let table = ctx.edge_table(Gamut::DisplayP3);
        let src = Color::rgb(Gamut::DisplayP3, [1.0, 0.99937, 0.86721]);
        let out = map(&src, &table, Gamut::DisplayP3).coords();
        for (a, b) in out.iter().zip(src.coords()) {
            assert_abs_diff_eq!(*a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_in_gamut_preserved() {
        let ctx = MethodContext::new();
        let table = ctx.edge_table(Gamut::DisplayP3);
        let src = Color::rgb(Gamut::DisplayP3, [0.5, 0.45, 0.4]);
        let out = map(&src, &table, Gamut::DisplayP3).coords();
        for (a, b) in out.iter().zip(src.coords()) {
            assert_abs_diff_eq!(*a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_black_and_white() {
        let ctx = MethodContext::new();
        let table = ctx.edge_table(Gamut::Srgb);
        let out = map(&Color::oklch(1.1, 0.3, 20.0), &table, Gamut::Srgb);
        assert_eq!(out.coords(), [1.0, 1.0, 1.0]);
        let out = map(&Color::oklch(-0.1, 0.3, 20.0), &table, Gamut::Srgb);
        assert_eq!(out.coords(), [0.0, 0.0, 0.0]);
    }
}
