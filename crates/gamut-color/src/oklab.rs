//! Oklab and Oklch.
//!
//! ```text
//! XYZ-D65 --M1--> LMS --cbrt--> LMS' --M2--> Oklab --polar--> Oklch
//! ```
//!
//! M1 is the XYZ-based form of Ottosson's matrix, so every RGB gamut can
//! reach Oklab through its own RGB-to-XYZ matrix.

use std::sync::OnceLock;

use gamut_math::{constrain_angle, Mat3, Vec3};

/// XYZ (D65) to LMS.
pub const XYZ_TO_LMS: Mat3 = Mat3::from_rows([
    [0.8190224379967030, 0.3619062600528904, -0.1288737815209879],
    [0.0329836539323885, 0.9292868615863434, 0.0361446663506424],
    [0.0481771893596242, 0.2642395317527308, 0.6335478284694309],
]);

/// Non-linear LMS to Oklab.
pub const LMS_TO_OKLAB: Mat3 = Mat3::from_rows([
    [0.2104542683093140, 0.7936177747023054, -0.0040720430116193],
    [1.9779985324311684, -2.4285922420485799, 0.4505937096174110],
    [0.0259040424655478, 0.7827717124575296, -0.8086757549230774],
]);

/// Below this magnitude on both `a` and `b` the hue is undefined.
pub const ACHROMATIC_THRESHOLD: f64 = 0.000004;

struct Inverses {
    lms_to_xyz: Mat3,
    oklab_to_lms: Mat3,
}

fn inverses() -> &'static Inverses {
    static INSTANCE: OnceLock<Inverses> = OnceLock::new();
    INSTANCE.get_or_init(|| Inverses {
        lms_to_xyz: XYZ_TO_LMS.inverse().unwrap_or(Mat3::IDENTITY),
        oklab_to_lms: LMS_TO_OKLAB.inverse().unwrap_or(Mat3::IDENTITY),
    })
}

/// LMS to XYZ (D65), the inverse of [`XYZ_TO_LMS`].
pub fn lms_to_xyz() -> Mat3 {
    inverses().lms_to_xyz
}

/// Oklab to non-linear LMS, the inverse of [`LMS_TO_OKLAB`].
///
/// First column is all ones: `L` contributes equally to every cone.
pub fn oklab_to_lms() -> Mat3 {
    inverses().oklab_to_lms
}

/// XYZ (D65) to Oklab.
#[inline]
pub fn xyz_to_oklab(xyz: Vec3) -> Vec3 {
    LMS_TO_OKLAB * (XYZ_TO_LMS * xyz).cbrt()
}

/// Oklab to XYZ (D65).
#[inline]
pub fn oklab_to_xyz(lab: Vec3) -> Vec3 {
    lms_to_xyz() * (oklab_to_lms() * lab).cube()
}

/// Oklab to Oklch. Hue is NaN for achromatic colors.
#[inline]
pub fn oklab_to_oklch(lab: Vec3) -> Vec3 {
    let (a, b) = (lab.y, lab.z);
    let c = a.hypot(b);
    let h = if a.abs() < ACHROMATIC_THRESHOLD && b.abs() < ACHROMATIC_THRESHOLD {
        f64::NAN
    } else {
        constrain_angle(b.atan2(a).to_degrees())
    };
    Vec3::new(lab.x, c, h)
}

/// Oklch to Oklab. A NaN hue reads as 0.
#[inline]
pub fn oklch_to_oklab(lch: Vec3) -> Vec3 {
    let h = if lch.z.is_nan() { 0.0 } else { lch.z.to_radians() };
    Vec3::new(lch.x, lch.y * h.cos(), lch.y * h.sin())
}
