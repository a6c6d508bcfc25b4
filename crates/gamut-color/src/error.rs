//! Error types for color operations.

use thiserror::Error;

/// Color operation error.
///
/// Raised only at construction and name parsing. Conversions between
/// valid colors never fail.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Coordinate is NaN or infinite where a number is required.
    #[error("invalid coordinate {index} for {space}: {value}")]
    InvalidValue {
        /// Space the coordinates belong to.
        space: String,
        /// Coordinate position (0..3).
        index: usize,
        /// Offending value.
        value: f64,
    },

    /// Unrecognized color space name.
    #[error("unknown color space: {0}")]
    UnknownSpace(String),

    /// Unrecognized gamut name.
    #[error(transparent)]
    UnknownGamut(#[from] gamut_primaries::UnknownGamut),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
