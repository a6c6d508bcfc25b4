//! The sweep: enumerate, filter, map, measure, aggregate.
//!
//! ```text
//! Grid --candidate--> in Rec.2020? --yes--> skip
//!                          | no
//!                          v
//!          for each method: Registry::compute
//!              for each target: clip -> DeltaRecord -> Aggregate
//! ```
//!
//! A sweep is single-threaded. Cancellation is polled between candidates.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use tracing::{debug, info};

use gamut_color::Gamut;
use gamut_map::{MethodEntry, Registry};

use crate::aggregate::{result_key, Aggregate};
use crate::config::SweepConfig;
use crate::delta::DeltaRecord;
use crate::error::CompareResult;
use crate::grid::Grid;
use crate::messages::Snapshot;

/// How a sweep ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Every candidate was visited.
    Finished(Snapshot),
    /// Stopped early; the snapshot covers what was processed.
    Cancelled(Snapshot),
}

impl Outcome {
    /// Final snapshot either way.
    pub fn snapshot(&self) -> &Snapshot {
        match self {
            Outcome::Finished(s) | Outcome::Cancelled(s) => s,
        }
    }

    /// Consumes the outcome, returning its snapshot.
    pub fn into_snapshot(self) -> Snapshot {
        match self {
            Outcome::Finished(s) | Outcome::Cancelled(s) => s,
        }
    }
}

/// One selected method with its result keys per target.
struct Lane<'a> {
    entry: &'a MethodEntry,
    targets: Vec<(Gamut, String)>,
}

/// A validated sweep, ready to run.
pub struct Sweep<'a> {
    registry: &'a Registry,
    config: SweepConfig,
    grid: Grid,
    lanes: Vec<Lane<'a>>,
}

impl<'a> Sweep<'a> {
    /// Validates `config` against `registry`.
    pub fn new(registry: &'a Registry, config: SweepConfig) -> CompareResult<Self> {
        config.validate(registry)?;
        let mut lanes = Vec::with_capacity(config.methods.len());
        for key in &config.methods {
            let entry = registry.get(key)?;
            let targets = config
                .targets
                .iter()
                .map(|&t| (t, result_key(entry.result_prefix, t)))
                .collect();
            lanes.push(Lane { entry, targets });
        }
        Ok(Self {
            registry,
            grid: Grid::new(config.delta),
            config,
            lanes,
        })
    }

    /// Config the sweep runs with.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Candidate grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Runs to completion or until `cancel` is set.
    ///
    /// `on_progress` sees a snapshot after each processed candidate whose
    /// grid index is a multiple of the progress interval.
    pub fn run(&self, cancel: &AtomicBool, mut on_progress: impl FnMut(&Snapshot)) -> CompareResult<Outcome> {
        let start = Instant::now();
        info!(
            delta = self.config.delta,
            candidates = self.grid.len(),
            methods = self.lanes.len(),
            targets = self.config.targets.len(),
            "sweep started"
        );

        self.registry
            .prepare(self.config.methods.iter().map(String::as_str))?;

        let keys = self.lanes.iter().flat_map(|l| l.targets.iter().map(|(_, k)| k.clone()));
        let mut aggregate = Aggregate::new(keys);
        let (mut count, mut processed, mut skipped) = (0, 0, 0);
        let interval = self.config.progress_interval;

        for candidate in self.grid.iter() {
            if cancel.load(Ordering::Relaxed) {
                info!(count, processed, skipped, "sweep cancelled");
                return Ok(Outcome::Cancelled(self.snapshot(&aggregate, count, processed, skipped)));
            }
            count = candidate.index;

            let color = candidate.color();
            if color.in_gamut(Gamut::Rec2020, 0.0) {
                skipped += 1;
                continue;
            }
            processed += 1;
            let n = self.config.divisor.divisor(processed, candidate.index);

            for lane in &self.lanes {
                let mapped = self.registry.compute(lane.entry, &color);
                for (target, key) in &lane.targets {
                    let clipped = mapped.clip(*target);
                    aggregate.fold(key, &DeltaRecord::between(&color, &clipped), n);
                }
            }

            if candidate.index % interval == 0 {
                debug!(index = candidate.index, processed, skipped, "sweep progress");
                on_progress(&self.snapshot(&aggregate, count, processed, skipped));
            }
        }

        info!(
            count,
            processed,
            skipped,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "sweep finished"
        );
        Ok(Outcome::Finished(self.snapshot(&aggregate, count, processed, skipped)))
    }

    fn snapshot(&self, aggregate: &Aggregate, count: usize, processed: usize, skipped: usize) -> Snapshot {
        Snapshot {
            results: aggregate.results().clone(),
            count,
            processed,
            skipped,
            delta: self.config.delta,
        }
    }
}

/// Validates and runs `config` on the calling thread.
pub fn run_sweep(
    registry: &Registry,
    config: SweepConfig,
    cancel: &AtomicBool,
    on_progress: impl FnMut(&Snapshot),
) -> CompareResult<Outcome> {
    Sweep::new(registry, config)?.run(cancel, on_progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::AverageDivisor;
    use crate::error::CompareError;

    fn config(delta: f64, methods: &[&str]) -> SweepConfig {
        SweepConfig {
            delta,
            methods: methods.iter().map(|m| m.to_string()).collect(),
            ..SweepConfig::default()
        }
    }

    #[test]
    fn test_half_step_counts() {
        let registry = Registry::new(Gamut::DisplayP3);
        let cancel = AtomicBool::new(false);
        let outcome = run_sweep(&registry, config(0.5, &["clip", "chromium"]), &cancel, |_| {}).unwrap();
        let snap = outcome.snapshot();
        assert!(matches!(outcome, Outcome::Finished(_)));
        assert_eq!(snap.count, 26);
        // Inside Rec.2020: black, (0.5, 0.5, 0.5) and (0.5, 0.5, 1).
        assert_eq!(snap.skipped, 3);
        assert_eq!(snap.processed, 24);
        assert_eq!(snap.results.len(), 4);
        assert!(snap.results.contains_key("clipToP3"));
        assert!(snap.results.contains_key("chromiumToSrgb"));

        let again = run_sweep(&registry, config(0.5, &["clip", "chromium"]), &cancel, |_| {}).unwrap();
        assert_eq!(again, outcome);
    }

    #[test]
    fn test_progress_cadence() {
        let registry = Registry::new(Gamut::DisplayP3);
        let cancel = AtomicBool::new(false);
        let cfg = SweepConfig { progress_interval: 3, ..config(0.5, &["clip"]) };
        let mut seen = Vec::new();
        run_sweep(&registry, cfg, &cancel, |s| seen.push(s.count)).unwrap();
        assert!(!seen.is_empty());
        assert!(seen.iter().all(|c| c % 3 == 0));
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_cancel_before_start() {
        let registry = Registry::new(Gamut::DisplayP3);
        let cancel = AtomicBool::new(true);
        let outcome = run_sweep(&registry, config(0.5, &["clip"]), &cancel, |_| {}).unwrap();
        match outcome {
            Outcome::Cancelled(snap) => {
                assert_eq!(snap.processed, 0);
                assert_eq!(snap.results["clipToP3"], DeltaRecord::default());
            }
            other => panic!("expected cancel, got {other:?}"),
        }
    }

    #[test]
    fn test_divisor_policies_differ() {
        let registry = Registry::new(Gamut::DisplayP3);
        let cancel = AtomicBool::new(false);
        let a = run_sweep(&registry, config(0.5, &["clip"]), &cancel, |_| {}).unwrap();
        let cfg = SweepConfig { divisor: AverageDivisor::SequenceIndex, ..config(0.5, &["clip"]) };
        let b = run_sweep(&registry, cfg, &cancel, |_| {}).unwrap();
        assert_eq!(a.snapshot().processed, b.snapshot().processed);
        assert_ne!(a.snapshot().results["clipToSrgb"], b.snapshot().results["clipToSrgb"]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let registry = Registry::new(Gamut::DisplayP3);
        let cancel = AtomicBool::new(false);
        let err = run_sweep(&registry, config(0.0, &["clip"]), &cancel, |_| {}).unwrap_err();
        assert!(matches!(err, CompareError::InvalidDelta { .. }));
    }
}
