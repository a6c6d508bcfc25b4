//! Comparison sweep command.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use gamut_color::Gamut;
use gamut_compare::{AverageDivisor, SweepConfig, SweepEvent, SweepWorker};
use gamut_map::Registry;

use crate::SweepArgs;

/// Builds the config from file and flags, runs it on the worker thread
/// and emits the final snapshot as JSON.
pub fn run(args: SweepArgs) -> Result<()> {
    let config = build_config(&args)?;
    let registry = Arc::new(Registry::new(Gamut::DisplayP3));
    config.validate(&registry).context("Invalid sweep config")?;

    let total = config.candidate_count();
    info!(delta = config.delta, total, "running sweep");

    let worker = SweepWorker::spawn(Arc::clone(&registry));
    let progress = args.progress;
    let event = worker.run_blocking(config, |snap| {
        if progress {
            eprintln!(
                "[{}/{}] processed {} skipped {}",
                snap.count + 1,
                total,
                snap.processed,
                snap.skipped
            );
        }
    })?;

    let snapshot = match event {
        SweepEvent::Finished(snap) => snap,
        SweepEvent::Cancelled(snap) => {
            debug!("sweep cancelled, writing partial results");
            snap
        }
        SweepEvent::Failed(msg) => bail!("Sweep failed: {msg}"),
        SweepEvent::Progress(_) => bail!("Sweep ended without a final snapshot"),
    };

    let json = snapshot.to_json_pretty()?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            if progress {
                eprintln!("Wrote {}", path.display());
            }
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn build_config(args: &SweepArgs) -> Result<SweepConfig> {
    let mut config = match &args.config {
        Some(path) => SweepConfig::from_file(path)
            .with_context(|| format!("Failed to load sweep config {}", path.display()))?,
        None => SweepConfig::default(),
    };

    if let Some(delta) = args.delta {
        config.delta = delta;
    }
    if let Some(methods) = &args.methods {
        config.methods = methods.iter().map(|m| m.trim().to_string()).collect();
    }
    if let Some(targets) = &args.targets {
        config.targets = targets
            .iter()
            .map(|t| super::parse_gamut(t.trim()))
            .collect::<Result<_>>()?;
    }
    if let Some(divisor) = &args.divisor {
        config.divisor = match divisor.as_str() {
            "sample-count" => AverageDivisor::SampleCount,
            "sequence-index" => AverageDivisor::SequenceIndex,
            other => bail!("Unknown divisor '{other}' (expected sample-count or sequence-index)"),
        };
    }
    Ok(config)
}
