//! CIE L*a*b* (D50) and the D65/D50 adaptation around it.

use std::sync::OnceLock;

use gamut_math::{adapt_matrix, Mat3, Vec3, BRADFORD, D50, D65};

const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

struct Adaptation {
    d65_to_d50: Mat3,
    d50_to_d65: Mat3,
}

fn adaptation() -> &'static Adaptation {
    static INSTANCE: OnceLock<Adaptation> = OnceLock::new();
    INSTANCE.get_or_init(|| Adaptation {
        d65_to_d50: adapt_matrix(BRADFORD, D65, D50),
        d50_to_d65: adapt_matrix(BRADFORD, D50, D65),
    })
}

/// XYZ D65 to XYZ D50 (Bradford).
#[inline]
pub fn xyz_d65_to_d50(xyz: Vec3) -> Vec3 {
    adaptation().d65_to_d50 * xyz
}

/// XYZ D50 to XYZ D65 (Bradford).
#[inline]
pub fn xyz_d50_to_d65(xyz: Vec3) -> Vec3 {
    adaptation().d50_to_d65 * xyz
}

/// XYZ (D50) to CIE Lab.
pub fn xyz_d50_to_lab(xyz: Vec3) -> Vec3 {
    let f = |v: f64| {
        if v > EPSILON {
            v.cbrt()
        } else {
            (KAPPA * v + 16.0) / 116.0
        }
    };
    let fx = f(xyz.x / D50.x);
    let fy = f(xyz.y / D50.y);
    let fz = f(xyz.z / D50.z);
    Vec3::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// CIE Lab to XYZ (D50).
pub fn lab_to_xyz_d50(lab: Vec3) -> Vec3 {
    let fy = (lab.x + 16.0) / 116.0;
    let fx = lab.y / 500.0 + fy;
    let fz = fy - lab.z / 200.0;

    let x = if fx.powi(3) > EPSILON { fx.powi(3) } else { (116.0 * fx - 16.0) / KAPPA };
    let y = if lab.x > KAPPA * EPSILON { fy.powi(3) } else { lab.x / KAPPA };
    let z = if fz.powi(3) > EPSILON { fz.powi(3) } else { (116.0 * fz - 16.0) / KAPPA };

    Vec3::new(x * D50.x, y * D50.y, z * D50.z)
}
