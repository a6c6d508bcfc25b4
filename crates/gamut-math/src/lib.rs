//! # gamut-math
//!
//! Math primitives for gamut mapping and color difference work.
//!
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ/LMS transforms
//! - [`Vec3`] - 3D vectors for color triplets
//! - Chromatic adaptation (Bradford) between D65 and D50
//! - Scalar helpers ([`lerp`], [`constrain_angle`], [`hue_distance`])
//!
//! # Design
//!
//! Everything is `f64`. Gamut boundary searches compare against zero
//! tolerance, so single precision is not enough here.
//! Matrices are **row-major** and act on **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use gamut_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4123907992659595, 0.357584339383878, 0.1804807884018343],
//!     [0.21263900587151036, 0.715168678767756, 0.07219231536073371],
//!     [0.01933081871559185, 0.11919477979462599, 0.9505321522496606],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.5, 0.25);
//! assert!(xyz.y > 0.0);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - double precision matrix inverse
//!
//! # Used By
//!
//! - `gamut-primaries` - RGB/XYZ matrix generation
//! - `gamut-color` - color space conversions
//! - `gamut-map` - Oklab/linear RGB transforms in the mapping methods

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;
mod interp;
mod adapt;

pub use mat3::*;
pub use vec3::*;
pub use interp::*;
pub use adapt::*;
