//! Naive per-channel clipping.

use gamut_color::{Color, Gamut};

/// Clamps each encoded channel of `color` in `gamut` to `[0, 1]`.
#[inline]
pub fn map(color: &Color, gamut: Gamut) -> Color {
    color.clip(gamut)
}
