//! Chromatic adaptation between white points.
//!
//! CIE Lab (and so ΔE2000) is defined relative to D50, while every RGB
//! gamut here is D65. The Bradford transform bridges the two.
//!
//! # Usage
//!
//! ```rust
//! use gamut_math::{adapt_matrix, BRADFORD, D65, D50};
//!
//! let d65_to_d50 = adapt_matrix(BRADFORD, D65, D50);
//! let white = d65_to_d50 * D65;
//! assert!((white.x - D50.x).abs() < 1e-9);
//! ```

use crate::{Mat3, Vec3};

// ============================================================================
// Standard Illuminants (XYZ white points, Y = 1)
// ============================================================================

/// CIE Standard Illuminant D65, derived from chromaticity (0.3127, 0.3290).
pub const D65: Vec3 = Vec3::new(
    0.3127 / 0.3290,
    1.0,
    (1.0 - 0.3127 - 0.3290) / 0.3290,
);

/// CIE Standard Illuminant D50, derived from chromaticity (0.3457, 0.3585).
pub const D50: Vec3 = Vec3::new(
    0.3457 / 0.3585,
    1.0,
    (1.0 - 0.3457 - 0.3585) / 0.3585,
);

// ============================================================================
// Cone response matrices
// ============================================================================

/// Bradford cone response matrix (XYZ to sharpened LMS).
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Builds a von Kries style adaptation matrix.
///
/// ```text
/// M = method^-1 * diag(dst_lms / src_lms) * method
/// ```
///
/// Falls back to identity if `method` is singular.
pub fn adapt_matrix(method: Mat3, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    let Some(method_inv) = method.inverse() else {
        return Mat3::IDENTITY;
    };
    let src = method * src_white;
    let dst = method * dst_white;
    let scale = Mat3::diagonal(dst.x / src.x, dst.y / src.y, dst.z / src.z);
    method_inv * scale * method
}
