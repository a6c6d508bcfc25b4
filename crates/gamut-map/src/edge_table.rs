//! Edge-seeker lookup table: maximum in-gamut Oklch chroma per
//! (lightness, hue) bucket.
//!
//! # Construction
//!
//! ```text
//! 6 cube faces x SAMPLES^2 encoded RGB points
//!     -> probe (r, g, b) -> (l, c, h)
//!     -> bucket (l, h), keep max c
//!     -> fill empty lightness buckets per hue column
//! ```
//!
//! Faces are sampled in parallel and merged with a per-bucket maximum,
//! which is order independent, so the table is deterministic.

use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use gamut_math::{constrain_angle, lerp};

/// Number of lightness buckets over `[0, 1]`.
pub const L_BUCKETS: usize = 200;
/// Number of hue buckets over `[0, 360)`.
pub const H_BUCKETS: usize = 360;
/// Samples per axis on each cube face.
pub const FACE_SAMPLES: usize = 256;

/// Oklch triple returned by a boundary probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    /// Lightness.
    pub l: f64,
    /// Chroma.
    pub c: f64,
    /// Hue in degrees; NaN is read as 0.
    pub h: f64,
}

/// Max chroma lookup for one gamut.
#[derive(Debug, Clone)]
pub struct EdgeTable {
    // Row-major: data[h * L_BUCKETS + l]
    data: Vec<f64>,
}

impl EdgeTable {
    /// Samples the RGB cube surface through `probe` and builds the table.
    ///
    /// `probe` receives encoded RGB in `[0, 1]^3` and returns its Oklch.
    pub fn build<F>(probe: F) -> Self
    where
        F: Fn(f64, f64, f64) -> Lch + Sync,
    {
        let start = Instant::now();
        let faces: [(usize, f64); 6] = [(0, 0.0), (0, 1.0), (1, 0.0), (1, 1.0), (2, 0.0), (2, 1.0)];

        let mut data = faces
            .par_iter()
            .map(|&(axis, fixed)| {
                let mut local = vec![f64::NAN; L_BUCKETS * H_BUCKETS];
                let n = (FACE_SAMPLES - 1) as f64;
                for i in 0..FACE_SAMPLES {
                    for j in 0..FACE_SAMPLES {
                        let (u, v) = (i as f64 / n, j as f64 / n);
                        let rgb = match axis {
                            0 => [fixed, u, v],
                            1 => [u, fixed, v],
                            _ => [u, v, fixed],
                        };
                        let lch = probe(rgb[0], rgb[1], rgb[2]);
                        if !(lch.l.is_finite() && lch.c.is_finite()) {
                            continue;
                        }
                        let idx = index(lch.l, lch.h);
                        let slot = &mut local[idx];
                        if slot.is_nan() || lch.c > *slot {
                            *slot = lch.c;
                        }
                    }
                }
                local
            })
            .reduce(
                || vec![f64::NAN; L_BUCKETS * H_BUCKETS],
                |mut acc, other| {
                    for (a, b) in acc.iter_mut().zip(other) {
                        if a.is_nan() || b > *a {
                            *a = b;
                        }
                    }
                    acc
                },
            );

        let filled = fill_holes(&mut data);
        debug!(
            filled,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "edge_table::build"
        );
        Self { data }
    }

    /// Maximum chroma for lightness `l` and hue `h` (degrees) from the
    /// nearest bucket. NaN hue reads as 0.
    #[inline]
    pub fn max_chroma(&self, l: f64, h: f64) -> f64 {
        self.data[index(l, h)]
    }

    /// Raw bucket value.
    pub fn bucket(&self, l_bucket: usize, h_bucket: usize) -> f64 {
        self.data[h_bucket * L_BUCKETS + l_bucket]
    }
}

/// Bucket index for a lightness/hue pair.
fn index(l: f64, h: f64) -> usize {
    let l = if l.is_nan() { 0.0 } else { l.clamp(0.0, 1.0) };
    let h = if h.is_nan() { 0.0 } else { constrain_angle(h) };
    let li = ((l * L_BUCKETS as f64) as usize).min(L_BUCKETS - 1);
    let hi = ((h / 360.0 * H_BUCKETS as f64) as usize).min(H_BUCKETS - 1);
    hi * L_BUCKETS + li
}

/// Center lightness of a bucket.
fn center(li: usize) -> f64 {
    (li as f64 + 0.5) / L_BUCKETS as f64
}

/// Fills NaN buckets in each hue column by linear interpolation between
/// the nearest filled neighbours, with chroma 0 at `l = 0` and `l = 1`.
/// Returns the number of buckets filled.
fn fill_holes(data: &mut [f64]) -> usize {
    let mut filled = 0;
    for column in data.chunks_mut(L_BUCKETS) {
        let mut prev: (f64, f64) = (0.0, 0.0);
        let mut li = 0;
        while li < L_BUCKETS {
            if !column[li].is_nan() {
                prev = (center(li), column[li]);
                li += 1;
                continue;
            }
            let end = (li..L_BUCKETS).find(|&k| !column[k].is_nan());
            let next = match end {
                Some(k) => (center(k), column[k]),
                None => (1.0, 0.0),
            };
            let stop = end.unwrap_or(L_BUCKETS);
            for k in li..stop {
                let t = (center(k) - prev.0) / (next.0 - prev.0);
                column[k] = lerp(prev.1, next.1, t);
                filled += 1;
            }
            li = stop;
        }
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic(_r: f64, g: f64, b: f64) -> Lch {
        // Lightness follows g, chroma follows b, hue fixed at 10 degrees.
        Lch { l: g, c: b, h: 10.0 }
    }

    #[test]
    fn test_bucket_keeps_maximum() {
        let table = EdgeTable::build(synthetic);
        // Every lightness saw b = 1 on the b = 1 face.
        assert_eq!(table.max_chroma(0.5, 10.0), 1.0);
        assert_eq!(table.max_chroma(0.0, 10.5), 1.0);
    }

    #[test]
    fn test_empty_column_is_zero() {
        let table = EdgeTable::build(synthetic);
        // No samples at hue 200: the column interpolates between the zero anchors.
        assert_eq!(table.max_chroma(0.5, 200.0), 0.0);
    }

    #[test]
    fn test_fill_holes_interpolates() {
        let mut column = vec![f64::NAN; L_BUCKETS];
        column[50] = 0.4;
        column[150] = 0.2;
        let filled = fill_holes(&mut column);
        assert_eq!(filled, L_BUCKETS - 2);
        assert!((column[100] - 0.3).abs() < 1e-12);
        assert!(column[0] > 0.0 && column[0] < 0.4);
        assert!(column[199] > 0.0 && column[199] < 0.2);
    }

    #[test]
    fn test_index_wraps_hue() {
        assert_eq!(index(0.5, 360.0), index(0.5, 0.0));
        assert_eq!(index(0.5, -1.0), index(0.5, 359.0));
        assert_eq!(index(1.0, f64::NAN), index(0.999, 0.0));
    }
}
