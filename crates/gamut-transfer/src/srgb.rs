//! sRGB transfer function, sign-extended.
//!
//! Display P3 shares this curve.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// sRGB EOTF: decodes encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if |V| <= 0.04045:
///     L = V / 12.92
/// else:
///     L = sign(V) * ((|V| + 0.055) / 1.055)^2.4
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    let abs = v.abs();
    if abs <= 0.04045 {
        v / 12.92
    } else {
        v.signum() * ((abs + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: encodes linear light.
///
/// # Formula
///
/// ```text
/// if |L| <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = sign(L) * (1.055 * |L|^(1/2.4) - 0.055)
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    let abs = l.abs();
    if abs <= 0.0031308 {
        l * 12.92
    } else {
        l.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    }
}

/// Applies [`eotf`] to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(eotf)
}

/// Applies [`oetf`] to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(oetf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in -100..=200 {
            let v = i as f64 / 100.0;
            let back = oetf(eotf(v));
            assert!((v - back).abs() < 1e-12, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert!((eotf(1.0) - 1.0).abs() < 1e-15);
        assert_eq!(oetf(0.0), 0.0);
        assert!((oetf(1.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_midpoint() {
        let linear = eotf(0.5);
        assert!((linear - 0.214).abs() < 0.001);
    }

    #[test]
    fn test_odd_symmetry() {
        for v in [0.01, 0.3, 0.9, 1.4] {
            assert_eq!(eotf(-v), -eotf(v));
            assert_eq!(oetf(-v), -oetf(v));
        }
    }
}
