//! # gamut-compare
//!
//! Statistical comparison of gamut mapping methods.
//!
//! A sweep walks a regular grid over the XYZ unit cube, skips colors that
//! are already inside Rec.2020, maps every remaining color with each
//! selected method, clips the result into each target gamut and folds the
//! Oklch and ΔE2000 differences into running means.
//!
//! # Architecture
//!
//! ```text
//!  caller --WorkerMsg--> SweepWorker thread --SweepEvent--> caller
//!                              |
//!                            Sweep
//!               Grid -> Registry -> DeltaRecord -> Aggregate
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::atomic::AtomicBool;
//! use gamut_compare::{run_sweep, SweepConfig};
//! use gamut_map::Registry;
//!
//! let config = SweepConfig {
//!     methods: vec!["clip".into()],
//!     ..SweepConfig::with_delta(0.5)
//! };
//! let outcome = run_sweep(Registry::global(), config, &AtomicBool::new(false), |_| {}).unwrap();
//! let snap = outcome.snapshot();
//! assert_eq!(snap.processed + snap.skipped, 27);
//! assert!(snap.results.contains_key("clipToP3"));
//! ```
//!
//! # Dependencies
//!
//! - `gamut-map` - method registry
//! - `serde_yaml` - config files
//! - `serde_json` - commands and snapshots
//! - `tracing` - sweep logging

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod aggregate;
pub mod config;
pub mod delta;
pub mod grid;
pub mod messages;
pub mod sweep;
pub mod worker;

pub use aggregate::{running_average, Aggregate, AverageDivisor, Results};
pub use config::SweepConfig;
pub use delta::DeltaRecord;
pub use error::{CompareError, CompareResult};
pub use grid::{Candidate, Grid};
pub use messages::{Command, Snapshot, SweepEvent, WorkerMsg};
pub use sweep::{run_sweep, Outcome, Sweep};
pub use worker::SweepWorker;
