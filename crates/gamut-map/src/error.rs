//! Error types for gamut mapping.

use thiserror::Error;

/// Gamut mapping error.
#[derive(Debug, Error)]
pub enum MapError {
    /// Method key not present in the registry.
    #[error("unknown gamut mapping method: {key} (known: {known})")]
    UnknownMethod {
        /// Requested key.
        key: String,
        /// Comma separated list of registered keys.
        known: String,
    },

    /// Invalid input color.
    #[error(transparent)]
    Color(#[from] gamut_color::ColorError),
}

/// Result type for gamut mapping.
pub type MapResult<T> = Result<T, MapError>;
