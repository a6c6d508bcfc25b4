//! # gamut-color
//!
//! Color values and the conversion primitives gamut mapping consumes:
//!
//! - **Spaces** - XYZ (D65/D50), CIE Lab, Oklab, Oklch, encoded and
//!   linear sRGB, Display P3 and Rec.2020
//! - **Gamut tests** - per-channel range test with a tolerance
//! - **Clipping** - naive per-channel clamp into a gamut
//! - **Differences** - ΔE2000 and ΔEOK
//!
//! # Architecture
//!
//! ```text
//!                  gamut-color
//!                       |
//!         +-------------+-------------+
//!         |                           |
//!  gamut-transfer              gamut-primaries
//!                                     |
//!                                gamut-math
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use gamut_color::{Color, Gamut, Space};
//!
//! let wide = Color::rgb(Gamut::Rec2020, [0.0, 1.0, 0.0]);
//! assert!(!wide.in_gamut(Gamut::DisplayP3, 0.0));
//!
//! let lch = wide.to(Space::Oklch);
//! let clipped = wide.clip(Gamut::DisplayP3);
//! assert!(clipped.delta_e_2000(&wide) > 0.0);
//! # let _ = lch;
//! ```
//!
//! # Dependencies
//!
//! - `gamut-math` - Vec3, Mat3, Bradford adaptation
//! - `gamut-primaries` - RGB <-> XYZ matrices
//! - `gamut-transfer` - sRGB and Rec.2020 curves
//!
//! # Used By
//!
//! - `gamut-map` - mapping methods
//! - `gamut-compare` - sweep deltas

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod error;
mod space;
pub mod convert;
pub mod delta_e;
pub mod lab;
pub mod oklab;

pub use color::{Color, DEFAULT_GAMUT_EPSILON};
pub use error::{ColorError, ColorResult};
pub use space::Space;
pub use gamut_primaries::Gamut;

// Re-export sub-crates for convenience
pub use gamut_math as math;
pub use gamut_primaries as primaries;
pub use gamut_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{Color, ColorError, ColorResult, Gamut, Space, DEFAULT_GAMUT_EPSILON};
    pub use gamut_math::{Mat3, Vec3};
}
