//! Scalar helpers shared by the mapping methods.
//!
//! ```rust
//! use gamut_math::{constrain_angle, hue_distance, lerp};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(hue_distance(-350.0), 10.0);
//! assert_eq!(constrain_angle(-90.0), 270.0);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Folds an angle in degrees into `[0, 360)`.
#[inline]
pub fn constrain_angle(angle: f64) -> f64 {
    ((angle % 360.0) + 360.0) % 360.0
}

/// Shorter-arc absolute difference between two hue angles, in `[0, 180]`.
///
/// `raw` is the signed difference. It is folded as
/// `((raw % 360) + 720) % 360` before taking `min(d, 360 - d)`.
/// NaN propagates, callers decide what an undefined hue means.
#[inline]
pub fn hue_distance(raw: f64) -> f64 {
    let d = ((raw % 360.0) + 720.0) % 360.0;
    d.min(360.0 - d)
}
