//! Candidate grid over the XYZ unit cube.
//!
//! Candidates are enumerated lazily in lexicographic `(x, y, z)` order,
//! `z` varying fastest. Coordinates are `i * delta`, so there is no drift
//! from repeated addition. Each [`Grid::iter`] call starts a fresh pass.

use gamut_color::Color;

/// Slack absorbing rounding in `1 / delta`, so `delta = 0.1` gives 11
/// points per axis and not 10.
const COUNT_SLACK: f64 = 1e-9;

/// One grid point with its 0-based sequence index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Position in the enumeration.
    pub index: usize,
    /// XYZ-D65 coordinates.
    pub xyz: [f64; 3],
}

impl Candidate {
    /// The candidate as an XYZ-D65 color.
    pub fn color(&self) -> Color {
        let [x, y, z] = self.xyz;
        Color::xyz(x, y, z)
    }
}

/// Points per axis for step `delta`, saturating at `u64::MAX`.
///
/// Steps so small that `1 / delta` leaves the `u64` range (or overflows
/// to infinity) saturate, so validation sees them as too many candidates.
pub fn points_per_axis(delta: f64) -> u64 {
    // Float-to-int casts saturate; the `+ 1` must as well.
    ((1.0 / delta + COUNT_SLACK).floor() as u64).saturating_add(1)
}

/// Total candidate count for step `delta`, saturating on overflow.
pub fn candidate_count(delta: f64) -> u64 {
    let n = points_per_axis(delta);
    n.saturating_mul(n).saturating_mul(n)
}

/// Regular grid over `[0, 1]^3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    delta: f64,
    per_axis: usize,
}

impl Grid {
    /// Grid with step `delta`.
    pub fn new(delta: f64) -> Self {
        Self {
            delta,
            per_axis: points_per_axis(delta) as usize,
        }
    }

    /// Grid step.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Points per axis.
    pub fn per_axis(&self) -> usize {
        self.per_axis
    }

    /// Total number of candidates.
    pub fn len(&self) -> usize {
        self.per_axis * self.per_axis * self.per_axis
    }

    /// True when the grid has no points.
    pub fn is_empty(&self) -> bool {
        self.per_axis == 0
    }

    /// Fresh enumeration from the first candidate.
    pub fn iter(&self) -> GridIter {
        GridIter { grid: *self, next: 0 }
    }
}

impl IntoIterator for &Grid {
    type Item = Candidate;
    type IntoIter = GridIter;

    fn into_iter(self) -> GridIter {
        self.iter()
    }
}

/// Lazy candidate enumeration.
#[derive(Debug, Clone)]
pub struct GridIter {
    grid: Grid,
    next: usize,
}

impl Iterator for GridIter {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if self.next >= self.grid.len() {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let n = self.grid.per_axis;
        let (i, j, k) = (index / (n * n), (index / n) % n, index % n);
        let d = self.grid.delta;
        Some(Candidate {
            index,
            xyz: [i as f64 * d, j as f64 * d, k as f64 * d],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.grid.len() - self.next;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for GridIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_per_axis() {
        assert_eq!(points_per_axis(0.5), 3);
        assert_eq!(points_per_axis(0.1), 11);
        assert_eq!(points_per_axis(0.3), 4);
        assert_eq!(points_per_axis(1.0), 2);
        assert_eq!(candidate_count(0.05), 21 * 21 * 21);
    }

    #[test]
    fn test_tiny_steps_saturate() {
        for delta in [1e-20, f64::MIN_POSITIVE, 5e-324] {
            assert_eq!(points_per_axis(delta), u64::MAX, "{delta}");
            assert_eq!(candidate_count(delta), u64::MAX, "{delta}");
        }
        assert_eq!(points_per_axis(1e-6), 1_000_001);
    }

    #[test]
    fn test_order_is_lexicographic() {
        let grid = Grid::new(0.5);
        let points: Vec<_> = grid.iter().collect();
        assert_eq!(points.len(), 27);
        assert_eq!(points[0].xyz, [0.0, 0.0, 0.0]);
        assert_eq!(points[1].xyz, [0.0, 0.0, 0.5]);
        assert_eq!(points[3].xyz, [0.0, 0.5, 0.0]);
        assert_eq!(points[9].xyz, [0.5, 0.0, 0.0]);
        assert_eq!(points[26].xyz, [1.0, 1.0, 1.0]);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.index, i);
        }
    }

    #[test]
    fn test_restartable() {
        let grid = Grid::new(0.25);
        let mut first = grid.iter();
        first.next();
        first.next();
        assert_eq!(first.len(), grid.len() - 2);
        assert_eq!(grid.iter().next().map(|c| c.index), Some(0));
    }

    #[test]
    fn test_no_drift() {
        let grid = Grid::new(0.1);
        let last = grid.iter().last().unwrap();
        assert_eq!(last.xyz, [1.0, 1.0, 1.0]);
    }
}
