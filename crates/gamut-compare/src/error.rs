//! Error types for sweep configuration and execution.
//!
//! Configuration problems are reported by [`SweepConfig::validate`]
//! before any candidate is processed.
//!
//! [`SweepConfig::validate`]: crate::SweepConfig::validate

use std::path::PathBuf;
use thiserror::Error;

/// Result type for sweep operations.
pub type CompareResult<T> = Result<T, CompareError>;

/// Errors that can occur while configuring or running a sweep.
#[derive(Debug, Error)]
pub enum CompareError {
    /// I/O error reading a config or writing results.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing or encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file not found.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// Grid step is not a finite value in `(0, 1]`.
    #[error("invalid grid step: {delta} (expected a finite value in (0, 1])")]
    InvalidDelta {
        /// Rejected step.
        delta: f64,
    },

    /// Grid step yields more candidates than allowed.
    #[error("grid step {delta} yields {count} candidates (limit {max})")]
    TooManyCandidates {
        /// Grid step.
        delta: f64,
        /// Candidate count of the grid.
        count: u64,
        /// Configured limit.
        max: u64,
    },

    /// No methods selected.
    #[error("no gamut mapping methods selected")]
    NoMethods,

    /// No target gamuts selected.
    #[error("no target gamuts selected")]
    NoTargets,

    /// Progress interval of zero.
    #[error("progress interval must be at least 1")]
    InvalidProgressInterval,

    /// Unknown method or invalid color.
    #[error(transparent)]
    Map(#[from] gamut_map::MapError),

    /// Worker thread is gone.
    #[error("sweep worker disconnected")]
    WorkerDisconnected,
}
