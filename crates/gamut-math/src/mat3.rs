//! Row-major 3x3 matrices acting on column vectors.
//!
//! Every linear step between color spaces (RGB to XYZ, XYZ to LMS,
//! Bradford adaptation) is one [`Mat3`]. `m[row][col]` is the weight of
//! input component `col` in output component `row`:
//!
//! ```text
//! out.x = m[0][0]*x + m[0][1]*y + m[0][2]*z
//! ```

use std::ops::{Index, Mul};

use crate::Vec3;

/// Linear transform between two tristimulus spaces.
///
/// ```rust
/// use gamut_math::{Mat3, Vec3};
///
/// let scale = Mat3::diagonal(2.0, 1.0, 0.5);
/// assert_eq!(scale * Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 1.0, 0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// Rows of the matrix.
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// The identity transform.
    pub const IDENTITY: Self = Self::diagonal(1.0, 1.0, 1.0);

    /// Matrix with the given rows.
    #[inline]
    pub const fn from_rows(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Matrix whose columns are `a`, `b` and `c`.
    ///
    /// RGB-to-XYZ matrices are built this way: each column is the XYZ of
    /// one primary.
    #[inline]
    pub fn from_col_vecs(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self::from_rows([[a.x, b.x, c.x], [a.y, b.y, c.y], [a.z, b.z, c.z]])
    }

    /// Per-component scale.
    #[inline]
    pub const fn diagonal(x: f64, y: f64, z: f64) -> Self {
        Self::from_rows([[x, 0.0, 0.0], [0.0, y, 0.0], [0.0, 0.0, z]])
    }

    /// Row `i` as a vector.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        let [r0, r1, r2] = self.m;
        r0[0] * (r1[1] * r2[2] - r1[2] * r2[1]) - r0[1] * (r1[0] * r2[2] - r1[2] * r2[0])
            + r0[2] * (r1[0] * r2[1] - r1[1] * r2[0])
    }

    /// Inverse transform, or `None` for a (numerically) singular matrix.
    pub fn inverse(&self) -> Option<Self> {
        if self.determinant().abs() < 1e-14 {
            return None;
        }
        Some(Self::from_glam(self.to_glam().inverse()))
    }

    /// Column-major glam copy.
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        glam::DMat3::from_cols_array_2d(&self.m).transpose()
    }

    /// From a column-major glam matrix.
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        Self::from_rows(m.transpose().to_cols_array_2d())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }
}

impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let cols = [0, 1, 2].map(|j| Vec3::new(rhs.m[0][j], rhs.m[1][j], rhs.m[2][j]));
        Self::from_rows(self.m.map(|r| {
            let r = Vec3::from_array(r);
            cols.map(|c| r.dot(c))
        }))
    }
}

impl Index<usize> for Mat3 {
    type Output = [f64; 3];

    #[inline]
    fn index(&self, row: usize) -> &[f64; 3] {
        &self.m[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const M: Mat3 = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);

    #[test]
    fn test_apply() {
        assert_eq!(M * Vec3::new(1.0, 0.0, -1.0), Vec3::new(-2.0, -4.0, 5.0));
        assert_eq!(Mat3::IDENTITY * Vec3::new(0.3, 0.2, 0.1), Vec3::new(0.3, 0.2, 0.1));
    }

    #[test]
    fn test_inverse_undoes() {
        assert_abs_diff_eq!(M.determinant(), 1.0, epsilon = 1e-12);
        let product = M * M.inverse().unwrap();
        for (i, row) in product.m.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                assert_abs_diff_eq!(v, if i == j { 1.0 } else { 0.0 }, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_singular_has_no_inverse() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_columns() {
        let m = Mat3::from_col_vecs(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0), Vec3::new(7.0, 8.0, 9.0));
        assert_eq!(m[0], [1.0, 4.0, 7.0]);
        assert_eq!(m.row(2), Vec3::new(3.0, 6.0, 9.0));
    }

    #[test]
    fn test_glam_layout() {
        let g = M.to_glam();
        // glam stores columns; the second column is (2, 1, 6).
        assert_eq!(g.y_axis, glam::DVec3::new(2.0, 1.0, 6.0));
        assert_eq!(Mat3::from_glam(g), M);
    }
}
