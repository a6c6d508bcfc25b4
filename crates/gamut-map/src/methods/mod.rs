//! The gamut mapping algorithms.
//!
//! Every function here maps a color into (or onto the edge of) one RGB
//! gamut and returns it in that gamut's encoded space. Chaining into a
//! narrower display gamut is done by the registry.

pub mod bjorn;
pub mod chromium;
pub mod clip;
pub mod css;
pub mod edge_seeker;
pub mod raytrace;
pub mod scale;

use gamut_color::{Color, Gamut, Space};
use gamut_math::D65;

/// D65 white in the encoded space of `gamut`.
pub(crate) fn white(gamut: Gamut) -> Color {
    Color::xyz(D65.x, D65.y, D65.z).to(Space::encoded(gamut))
}

/// Black in the encoded space of `gamut`.
pub(crate) fn black(gamut: Gamut) -> Color {
    Color::rgb(gamut, [0.0, 0.0, 0.0])
}
