//! Message types for caller <-> worker communication.
//!
//! The caller sends commands, the worker answers with events. Commands
//! and snapshots also have a JSON form for external drivers.

use serde::{Deserialize, Serialize};

use crate::aggregate::Results;
use crate::config::SweepConfig;
use crate::error::CompareResult;

/// Inbound command in its JSON form: `{"command": "run", "delta": 0.05}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum Command {
    /// Start a sweep with the default config and this grid step.
    Run {
        /// Grid step.
        delta: f64,
    },
}

impl Command {
    /// Parses a JSON command.
    pub fn from_json(json: &str) -> CompareResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sweep config this command asks for.
    pub fn into_config(self) -> SweepConfig {
        match self {
            Command::Run { delta } => SweepConfig::with_delta(delta),
        }
    }
}

/// State of a sweep at a checkpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Running means per result key.
    pub results: Results,
    /// Grid index of the last enumerated candidate.
    pub count: usize,
    /// Candidates measured so far.
    pub processed: usize,
    /// Candidates skipped as already inside Rec.2020.
    pub skipped: usize,
    /// Grid step of the run.
    pub delta: f64,
}

impl Snapshot {
    /// Compact JSON form.
    pub fn to_json(&self) -> CompareResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON form.
    pub fn to_json_pretty(&self) -> CompareResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses the JSON form.
    pub fn from_json(json: &str) -> CompareResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Messages from the caller to the worker thread.
#[derive(Debug, Clone)]
pub enum WorkerMsg {
    /// Run a sweep.
    Run(SweepConfig),
    /// Stop the worker loop.
    Shutdown,
}

/// Events from the worker thread to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum SweepEvent {
    /// Checkpoint during a run.
    Progress(Snapshot),
    /// Run completed.
    Finished(Snapshot),
    /// Run stopped by cancellation.
    Cancelled(Snapshot),
    /// Run rejected or aborted.
    Failed(String),
}

impl SweepEvent {
    /// True for the event that ends a run.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SweepEvent::Progress(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::DeltaRecord;

    #[test]
    fn test_command_json() {
        let cmd = Command::from_json(r#"{"command": "run", "delta": 0.05}"#).unwrap();
        assert_eq!(cmd, Command::Run { delta: 0.05 });
        assert_eq!(cmd.into_config().delta, 0.05);
        assert!(Command::from_json(r#"{"command": "stop"}"#).is_err());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut results = Results::new();
        results.insert("clipToP3".into(), DeltaRecord { l: 1.0, c: 0.5, h: 2.0, delta2000: 3.0 });
        let snap = Snapshot { results, count: 26, processed: 20, skipped: 7, delta: 0.5 };
        let value: serde_json::Value = serde_json::from_str(&snap.to_json().unwrap()).unwrap();
        assert_eq!(value["results"]["clipToP3"]["L"], 1.0);
        assert_eq!(value["results"]["clipToP3"]["delta2000"], 3.0);
        assert_eq!(value["count"], 26);
        assert_eq!(value["delta"], 0.5);
        assert_eq!(Snapshot::from_json(&snap.to_json_pretty().unwrap()).unwrap(), snap);
    }

    #[test]
    fn test_terminal_events() {
        assert!(SweepEvent::Failed("x".into()).is_terminal());
        let snap = Snapshot { results: Results::new(), count: 0, processed: 0, skipped: 0, delta: 0.5 };
        assert!(!SweepEvent::Progress(snap).is_terminal());
    }
}
