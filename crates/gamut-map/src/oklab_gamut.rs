//! Oklab geometry of an RGB gamut.
//!
//! Direct Oklch <-> linear RGB transforms (skipping XYZ), the gamut cusp
//! per hue, and the intersection of a constant-hue line with the gamut
//! boundary. Used by the `bjorn` and `raytrace` methods.
//!
//! # Cusp search
//!
//! Along a ray from black at fixed hue, `(L, L*S*a, L*S*b)`, linear RGB
//! scales with `L^3`. The saturation `S = C/L` of the cusp is therefore the
//! first `S` at which a channel of `rgb(1, S*a, S*b)` reaches zero. It is
//! found by a coarse scan followed by bisection, so the same code works for
//! any gamut without fitted polynomial coefficients.

use gamut_color::{oklab, Gamut};
use gamut_math::{constrain_angle, Mat3, Vec3};

const SATURATION_STEP: f64 = 0.05;
const SATURATION_MAX: f64 = 10.0;
const BISECT_ITERATIONS: usize = 60;

/// Cusp of a gamut at one hue: lightness and chroma of maximum chroma.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cusp {
    /// Oklab lightness.
    pub l: f64,
    /// Oklab chroma.
    pub c: f64,
}

/// Oklab <-> linear RGB transforms for one gamut.
#[derive(Debug, Clone)]
pub struct OklabGamut {
    gamut: Gamut,
    lms_to_rgb: Mat3,
    rgb_to_lms: Mat3,
    oklab_to_lms: Mat3,
}

impl OklabGamut {
    /// Builds the LMS matrices for `gamut`.
    pub fn new(gamut: Gamut) -> Self {
        let m = gamut.matrices();
        Self {
            gamut,
            lms_to_rgb: m.xyz_to_rgb * oklab::lms_to_xyz(),
            rgb_to_lms: oklab::XYZ_TO_LMS * m.rgb_to_xyz,
            oklab_to_lms: oklab::oklab_to_lms(),
        }
    }

    /// Gamut these transforms belong to.
    pub fn gamut(&self) -> Gamut {
        self.gamut
    }

    /// Linear LMS to linear RGB.
    pub fn lms_to_rgb(&self) -> &Mat3 {
        &self.lms_to_rgb
    }

    /// Oklab to linear RGB.
    #[inline]
    pub fn oklab_to_linear(&self, lab: Vec3) -> Vec3 {
        self.lms_to_rgb * (self.oklab_to_lms * lab).cube()
    }

    /// Oklch to linear RGB. NaN hue reads as 0.
    #[inline]
    pub fn oklch_to_linear(&self, lch: Vec3) -> Vec3 {
        self.oklab_to_linear(oklab::oklch_to_oklab(lch))
    }

    /// Linear RGB to Oklch. Hue is always a number in `[0, 360)`.
    #[inline]
    pub fn linear_to_oklch(&self, rgb: Vec3) -> Vec3 {
        let lab = oklab::LMS_TO_OKLAB * (self.rgb_to_lms * rgb).cbrt();
        let (a, b) = (lab.y, lab.z);
        Vec3::new(lab.x, a.hypot(b), constrain_angle(b.atan2(a).to_degrees()))
    }

    /// Maximum saturation `S = C/L` for the normalized hue direction `(a, b)`.
    pub fn max_saturation(&self, a: f64, b: f64) -> f64 {
        let min_channel = |s: f64| self.oklab_to_linear(Vec3::new(1.0, s * a, s * b)).min_element();

        let mut lo = 0.0;
        let mut hi = SATURATION_STEP;
        while min_channel(hi) > 0.0 {
            lo = hi;
            hi += SATURATION_STEP;
            if hi > SATURATION_MAX {
                return SATURATION_MAX;
            }
        }
        for _ in 0..BISECT_ITERATIONS {
            let mid = 0.5 * (lo + hi);
            if min_channel(mid) > 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }

    /// Cusp for the normalized hue direction `(a, b)`.
    pub fn find_cusp(&self, a: f64, b: f64) -> Cusp {
        let s = self.max_saturation(a, b);
        let rgb = self.oklab_to_linear(Vec3::new(1.0, s * a, s * b));
        let l = (1.0 / rgb.max_element()).cbrt();
        Cusp { l, c: l * s }
    }

    /// Intersection of the line from `(l0, 0)` to `(l1, c1)` with the gamut
    /// boundary, as the parameter `t` along that line.
    ///
    /// `(a, b)` is the normalized hue direction. Below the cusp the boundary
    /// is the straight segment to black. Above it the segment to white is
    /// refined with one Halley step on the true curved surface.
    pub fn find_gamut_intersection(&self, a: f64, b: f64, l1: f64, c1: f64, l0: f64, cusp: Cusp) -> f64 {
        if (l1 - l0) * cusp.c - (cusp.l - l0) * c1 <= 0.0 {
            return cusp.c * l0 / (c1 * cusp.l + cusp.c * (l0 - l1));
        }

        let mut t = cusp.c * (l0 - 1.0) / (c1 * (cusp.l - 1.0) + cusp.c * (l0 - l1));

        let dl = l1 - l0;
        let dc = c1;

        let m = &self.oklab_to_lms.m;
        let k = Vec3::new(
            m[0][1] * a + m[0][2] * b,
            m[1][1] * a + m[1][2] * b,
            m[2][1] * a + m[2][2] * b,
        );
        let lms_dt = Vec3::new(dl + dc * k.x, dl + dc * k.y, dl + dc * k.z);

        let l = l0 * (1.0 - t) + t * l1;
        let c = t * c1;
        let lms_ = Vec3::new(l + c * k.x, l + c * k.y, l + c * k.z);

        let lms = lms_.cube();
        let lms_d1 = Vec3::new(
            3.0 * lms_dt.x * lms_.x * lms_.x,
            3.0 * lms_dt.y * lms_.y * lms_.y,
            3.0 * lms_dt.z * lms_.z * lms_.z,
        );
        let lms_d2 = Vec3::new(
            6.0 * lms_dt.x * lms_dt.x * lms_.x,
            6.0 * lms_dt.y * lms_dt.y * lms_.y,
            6.0 * lms_dt.z * lms_dt.z * lms_.z,
        );

        let mut step = f64::MAX;
        for i in 0..3 {
            let row = self.lms_to_rgb.row(i);
            let f = row.dot(lms) - 1.0;
            let f1 = row.dot(lms_d1);
            let f2 = row.dot(lms_d2);
            let u = f1 / (f1 * f1 - 0.5 * f * f2);
            if u >= 0.0 {
                step = step.min(-f * u);
            }
        }
        if step < f64::MAX {
            t += step;
        }
        t
    }
}
