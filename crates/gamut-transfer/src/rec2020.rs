//! Rec.2020 transfer function, sign-extended.
//!
//! # Reference
//!
//! ITU-R BT.2020-2, using the full precision constants.

/// Rec.2020 alpha (1.0993 in the 10/12-bit tables).
pub const ALPHA: f64 = 1.09929682680944;

/// Rec.2020 beta (0.0181 in the 10/12-bit tables).
pub const BETA: f64 = 0.018053968510807;

/// Rec.2020 EOTF: decodes encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if |V| < 4.5 * beta:
///     L = V / 4.5
/// else:
///     L = sign(V) * ((|V| + alpha - 1) / alpha)^(1/0.45)
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    let abs = v.abs();
    if abs < BETA * 4.5 {
        v / 4.5
    } else {
        v.signum() * ((abs + ALPHA - 1.0) / ALPHA).powf(1.0 / 0.45)
    }
}

/// Rec.2020 OETF: encodes linear light.
///
/// # Formula
///
/// ```text
/// if |L| >= beta:
///     V = sign(L) * (alpha * |L|^0.45 - (alpha - 1))
/// else:
///     V = 4.5 * L
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    let abs = l.abs();
    if abs >= BETA {
        l.signum() * (ALPHA * abs.powf(0.45) - (ALPHA - 1.0))
    } else {
        4.5 * l
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
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        for i in -100..=200 {
            let v = i as f64 / 100.0;
            assert_abs_diff_eq!(oetf(eotf(v)), v, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert_abs_diff_eq!(eotf(1.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(oetf(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_segments_meet() {
        // Linear and power segments agree at beta.
        let linear = 4.5 * BETA;
        let power = ALPHA * BETA.powf(0.45) - (ALPHA - 1.0);
        assert_abs_diff_eq!(linear, power, epsilon = 1e-9);
    }

    #[test]
    fn test_odd_symmetry() {
        assert_eq!(eotf(-0.6), -eotf(0.6));
        assert_eq!(oetf(-0.02), -oetf(0.02));
    }
}
