//! # gamut-transfer
//!
//! Transfer functions between encoded and linear RGB.
//!
//! Gamut mapping routinely feeds out-of-range values (negative or above 1)
//! through these curves, so every function here is **sign-extended**:
//! `f(-x) = -f(x)`. Clamping is left to the caller.
//!
//! # Supported Transfer Functions
//!
//! | Function | Used by | Range |
//! |----------|---------|-------|
//! | [`srgb`] | sRGB, Display P3 | unbounded, odd |
//! | [`rec2020`] | Rec.2020 | unbounded, odd |
//!
//! # Terminology
//!
//! - **EOTF**: Encoded -> Linear (`to_linear`)
//! - **OETF**: Linear -> Encoded (`from_linear`)
//!
//! # Usage
//!
//! ```rust
//! use gamut_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! assert_eq!(srgb::eotf(-0.5), -linear);
//! ```
//!
//! # Used By
//!
//! - `gamut-color` - encoded <-> linear RGB conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;
pub mod rec2020;
