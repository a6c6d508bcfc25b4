//! Per-channel differences between an original and a mapped color.

use serde::{Deserialize, Serialize};

use gamut_color::{Color, Space};
use gamut_math::hue_distance;

/// Oklch channel differences plus ΔE2000.
///
/// Also used as the running mean of such differences.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeltaRecord {
    /// Absolute lightness difference, in percent.
    #[serde(rename = "L")]
    pub l: f64,
    /// Absolute chroma difference.
    #[serde(rename = "C")]
    pub c: f64,
    /// Shorter-arc hue difference in degrees, `[0, 180]`.
    #[serde(rename = "H")]
    pub h: f64,
    /// CIEDE2000 difference.
    #[serde(rename = "delta2000")]
    pub delta2000: f64,
}

impl DeltaRecord {
    /// Differences of `mapped` relative to `original`.
    ///
    /// An undefined hue on either side gives a hue difference of 0.
    pub fn between(original: &Color, mapped: &Color) -> Self {
        let a = original.to(Space::Oklch).coords();
        let b = mapped.to(Space::Oklch).coords();

        let h = hue_distance(b[2] - a[2]);
        Self {
            l: ((b[0] - a[0]) * 100.0).abs(),
            c: (b[1] - a[1]).abs(),
            h: if h.is_nan() { 0.0 } else { h.abs() },
            delta2000: original.delta_e_2000(mapped),
        }
    }

    /// Fields in output order.
    pub fn to_array(&self) -> [f64; 4] {
        [self.l, self.c, self.h, self.delta2000]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use gamut_color::Gamut;

    #[test]
    fn test_identical_is_zero() {
        let c = Color::oklch(0.6, 0.2, 40.0);
        let d = DeltaRecord::between(&c, &c);
        assert_eq!(d.to_array(), [0.0; 4]);
    }

    #[test]
    fn test_channels() {
        let a = Color::oklch(0.6, 0.2, 350.0);
        let b = Color::oklch(0.5, 0.15, 10.0);
        let d = DeltaRecord::between(&a, &b);
        assert_abs_diff_eq!(d.l, 10.0, epsilon = 1e-6);
        assert_abs_diff_eq!(d.c, 0.05, epsilon = 1e-6);
        assert_abs_diff_eq!(d.h, 20.0, epsilon = 1e-6);
        assert!(d.delta2000 > 0.0);
    }

    #[test]
    fn test_gray_hue_is_zero() {
        let gray = Color::rgb(Gamut::Srgb, [0.5, 0.5, 0.5]);
        let red = Color::rgb(Gamut::Srgb, [0.8, 0.2, 0.2]);
        let d = DeltaRecord::between(&red, &gray);
        assert_eq!(d.h, 0.0);
        assert!(d.c > 0.1);
    }

    #[test]
    fn test_json_field_names() {
        let d = DeltaRecord { l: 1.0, c: 2.0, h: 3.0, delta2000: 4.0 };
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"L":1.0,"C":2.0,"H":3.0,"delta2000":4.0}"#);
    }
}
