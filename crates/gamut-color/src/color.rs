//! The [`Color`] value type.

use std::fmt;

use gamut_math::Vec3;
use gamut_primaries::Gamut;

use crate::convert::convert;
use crate::delta_e::{ciede2000, delta_eok};
use crate::error::{ColorError, ColorResult};
use crate::space::Space;

/// Default tolerance for [`Color::in_gamut`] on encoded RGB channels.
pub const DEFAULT_GAMUT_EPSILON: f64 = 0.000075;

/// A color: a space tag, three coordinates and an alpha.
///
/// Coordinates only mean something together with [`Color::space`].
/// Values are immutable; every operation returns a new `Color`.
///
/// # Example
///
/// ```rust
/// use gamut_color::{Color, Space, Gamut};
///
/// let c = Color::oklch(0.9, 0.4, 250.0);
/// assert!(!c.in_gamut(Gamut::Srgb, 0.0));
///
/// let clipped = c.clip(Gamut::Srgb);
/// assert_eq!(clipped.space(), Space::Srgb);
/// assert!(clipped.in_gamut(Gamut::Srgb, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    space: Space,
    coords: [f64; 3],
    alpha: f64,
}

impl Color {
    /// Creates a color without validation.
    #[inline]
    pub const fn new(space: Space, coords: [f64; 3]) -> Self {
        Self { space, coords, alpha: 1.0 }
    }

    /// Creates a color, rejecting NaN or infinite coordinates.
    ///
    /// A NaN hue is allowed (achromatic Oklch).
    pub fn try_new(space: Space, coords: [f64; 3]) -> ColorResult<Self> {
        for (index, &value) in coords.iter().enumerate() {
            let nan_hue = value.is_nan() && space.hue_index() == Some(index);
            if !value.is_finite() && !nan_hue {
                return Err(ColorError::InvalidValue {
                    space: space.id().to_string(),
                    index,
                    value,
                });
            }
        }
        Ok(Self::new(space, coords))
    }

    /// Oklch color.
    #[inline]
    pub const fn oklch(l: f64, c: f64, h: f64) -> Self {
        Self::new(Space::Oklch, [l, c, h])
    }

    /// Oklab color.
    #[inline]
    pub const fn oklab(l: f64, a: f64, b: f64) -> Self {
        Self::new(Space::Oklab, [l, a, b])
    }

    /// XYZ-D65 color.
    #[inline]
    pub const fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self::new(Space::XyzD65, [x, y, z])
    }

    /// Encoded RGB color in `gamut`.
    #[inline]
    pub const fn rgb(gamut: Gamut, rgb: [f64; 3]) -> Self {
        Self::new(Space::encoded(gamut), rgb)
    }

    /// Same space and alpha, new coordinates.
    #[inline]
    pub const fn with_coords(self, coords: [f64; 3]) -> Self {
        Self { coords, ..self }
    }

    /// Same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Space tag.
    #[inline]
    pub const fn space(&self) -> Space {
        self.space
    }

    /// Coordinates in [`Color::space`].
    #[inline]
    pub const fn coords(&self) -> [f64; 3] {
        self.coords
    }

    /// Alpha. Carried through conversions, otherwise unused.
    #[inline]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Coordinates as a vector.
    #[inline]
    pub fn vec(&self) -> Vec3 {
        Vec3::from_array(self.coords)
    }

    /// Converts to another space.
    #[inline]
    pub fn to(&self, space: Space) -> Color {
        Self {
            space,
            coords: convert(self.coords, self.space, space),
            alpha: self.alpha,
        }
    }

    /// True if every encoded channel in `gamut` lies in `[-epsilon, 1 + epsilon]`.
    pub fn in_gamut(&self, gamut: Gamut, epsilon: f64) -> bool {
        self.to(Space::encoded(gamut))
            .coords
            .iter()
            .all(|&c| c >= -epsilon && c <= 1.0 + epsilon)
    }

    /// Naive clip: converts to the encoded space of `gamut` and clamps each
    /// channel to `[0, 1]`. NaN channels become 0.
    pub fn clip(&self, gamut: Gamut) -> Color {
        let rgb = self.to(Space::encoded(gamut));
        rgb.with_coords(rgb.coords.map(|c| if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) }))
    }

    /// ΔE2000 against `other`, computed in CIE Lab D50.
    pub fn delta_e_2000(&self, other: &Color) -> f64 {
        ciede2000(self.to(Space::Lab).vec(), other.to(Space::Lab).vec())
    }

    /// ΔEOK against `other`.
    pub fn delta_e_ok(&self, other: &Color) -> f64 {
        delta_eok(self.to(Space::Oklab).vec(), other.to(Space::Oklab).vec())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.coords;
        write!(f, "{}({} {} {}", self.space, a, b, c)?;
        if self.alpha < 1.0 {
            write!(f, " / {}", self.alpha)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_try_new_rejects_non_finite() {
        assert!(Color::try_new(Space::Srgb, [0.5, f64::NAN, 0.5]).is_err());
        assert!(Color::try_new(Space::Oklab, [f64::INFINITY, 0.0, 0.0]).is_err());
        assert!(Color::try_new(Space::Oklch, [0.5, 0.0, f64::NAN]).is_ok());
        assert!(Color::try_new(Space::Oklch, [f64::NAN, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_in_gamut_epsilon() {
        let c = Color::rgb(Gamut::Srgb, [1.00005, 0.5, -0.00005]);
        assert!(c.in_gamut(Gamut::Srgb, DEFAULT_GAMUT_EPSILON));
        assert!(!c.in_gamut(Gamut::Srgb, 0.0));
    }

    #[test]
    fn test_srgb_inside_p3() {
        let red = Color::rgb(Gamut::Srgb, [1.0, 0.0, 0.0]);
        assert!(red.in_gamut(Gamut::DisplayP3, 0.0));
        let p3_red = Color::rgb(Gamut::DisplayP3, [1.0, 0.0, 0.0]);
        assert!(!p3_red.in_gamut(Gamut::Srgb, DEFAULT_GAMUT_EPSILON));
    }

    #[test]
    fn test_clip_clamps_raw_coords() {
        let c = Color::oklch(0.9, 0.4, 250.0);
        let raw = c.to(Space::Srgb).coords();
        let clipped = c.clip(Gamut::Srgb).coords();
        for i in 0..3 {
            assert_eq!(clipped[i], raw[i].clamp(0.0, 1.0));
        }
    }

    #[test]
    fn test_delta_e_identity() {
        let c = Color::oklch(0.6, 0.1, 30.0);
        assert!(c.delta_e_2000(&c) < 1e-9);
        assert!(c.delta_e_ok(&c.to(Space::Srgb)) < 1e-9);
    }

    #[test]
    fn test_delta_e_black_white() {
        let black = Color::rgb(Gamut::Srgb, [0.0, 0.0, 0.0]);
        let white = Color::rgb(Gamut::Srgb, [1.0, 1.0, 1.0]);
        assert_abs_diff_eq!(black.delta_e_2000(&white), 100.0, epsilon = 1e-3);
        assert_abs_diff_eq!(black.delta_e_ok(&white), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_alpha_survives_conversion() {
        let c = Color::oklch(0.5, 0.1, 120.0).with_alpha(0.5);
        assert_eq!(c.to(Space::Rec2020).alpha(), 0.5);
        assert_eq!(c.to_string(), "oklch(0.5 0.1 120 / 0.5)");
    }
}
