//! Sweep configuration.
//!
//! # YAML
//!
//! ```yaml
//! delta: 0.05
//! methods: [edge-seeker-rec2020, chromium, bjornRec2020, raytraceRec2020, clip]
//! targets: [display-p3, srgb]
//! divisor: sample-count
//! progress-interval: 100
//! max-candidates: 10000000
//! ```
//!
//! Every field is optional; missing fields take the defaults above.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use gamut_color::Gamut;
use gamut_map::Registry;

use crate::aggregate::{result_key, AverageDivisor};
use crate::error::{CompareError, CompareResult};
use crate::grid::candidate_count;

/// Default grid step.
pub const DEFAULT_DELTA: f64 = 0.05;

/// Default progress cadence, in grid indices.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;

/// Default candidate limit (a 0.005 step still fits).
pub const DEFAULT_MAX_CANDIDATES: u64 = 10_000_000;

/// Methods compared when none are selected.
pub const DEFAULT_METHODS: [&str; 5] = [
    "edge-seeker-rec2020",
    "chromium",
    "bjornRec2020",
    "raytraceRec2020",
    "clip",
];

/// Parameters of one sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SweepConfig {
    /// Grid step on each XYZ axis.
    pub delta: f64,
    /// Registry keys of the compared methods.
    pub methods: Vec<String>,
    /// Gamuts each mapped color is clipped into before measuring.
    pub targets: Vec<Gamut>,
    /// Running mean divisor policy.
    pub divisor: AverageDivisor,
    /// Emit a progress snapshot at grid indices that are multiples of this.
    pub progress_interval: usize,
    /// Upper bound on the grid size.
    pub max_candidates: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            delta: DEFAULT_DELTA,
            methods: DEFAULT_METHODS.iter().map(|m| m.to_string()).collect(),
            targets: vec![Gamut::DisplayP3, Gamut::Srgb],
            divisor: AverageDivisor::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

impl SweepConfig {
    /// Default config with grid step `delta`.
    pub fn with_delta(delta: f64) -> Self {
        Self {
            delta,
            ..Self::default()
        }
    }

    /// Loads a config from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> CompareResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CompareError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading sweep config");
        Self::from_yaml_str(&content)
    }

    /// Parses a config from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> CompareResult<Self> {
        // An empty document means "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serializes the config to YAML.
    pub fn to_yaml(&self) -> CompareResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks the config against `registry` before a run.
    pub fn validate(&self, registry: &Registry) -> CompareResult<()> {
        if !(self.delta.is_finite() && self.delta > 0.0 && self.delta <= 1.0) {
            return Err(CompareError::InvalidDelta { delta: self.delta });
        }
        let count = self.candidate_count();
        if count > self.max_candidates {
            return Err(CompareError::TooManyCandidates {
                delta: self.delta,
                count,
                max: self.max_candidates,
            });
        }
        if self.methods.is_empty() {
            return Err(CompareError::NoMethods);
        }
        for key in &self.methods {
            registry.get(key)?;
        }
        if self.targets.is_empty() {
            return Err(CompareError::NoTargets);
        }
        if self.progress_interval == 0 {
            return Err(CompareError::InvalidProgressInterval);
        }
        Ok(())
    }

    /// Number of grid candidates.
    pub fn candidate_count(&self) -> u64 {
        candidate_count(self.delta)
    }

    /// Result keys in the order methods and targets are listed.
    pub fn result_keys(&self, registry: &Registry) -> CompareResult<Vec<String>> {
        let mut keys = Vec::with_capacity(self.methods.len() * self.targets.len());
        for method in &self.methods {
            let entry = registry.get(method)?;
            for &target in &self.targets {
                keys.push(result_key(entry.result_prefix, target));
            }
        }
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_validate() {
        let config = SweepConfig::default();
        assert!(config.validate(Registry::global()).is_ok());
        assert_eq!(config.candidate_count(), 21 * 21 * 21);
    }

    #[test]
    fn test_yaml_partial() {
        let yaml = "delta: 0.1\nmethods: [clip, chromium]\ntargets: [srgb]\ndivisor: sequence-index\n";
        let config = SweepConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.delta, 0.1);
        assert_eq!(config.methods, ["clip", "chromium"]);
        assert_eq!(config.targets, [Gamut::Srgb]);
        assert_eq!(config.divisor, AverageDivisor::SequenceIndex);
        assert_eq!(config.progress_interval, DEFAULT_PROGRESS_INTERVAL);
    }

    #[test]
    fn test_yaml_empty_and_unknown_field() {
        assert_eq!(SweepConfig::from_yaml_str("").unwrap(), SweepConfig::default());
        assert!(matches!(
            SweepConfig::from_yaml_str("step: 0.1"),
            Err(CompareError::Yaml(_))
        ));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = SweepConfig::with_delta(0.25);
        let yaml = config.to_yaml().unwrap();
        assert_eq!(SweepConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "delta: 0.5\nprogress-interval: 5").unwrap();
        let config = SweepConfig::from_file(file.path()).unwrap();
        assert_eq!(config.delta, 0.5);
        assert_eq!(config.progress_interval, 5);

        let missing = SweepConfig::from_file("/nonexistent/sweep.yaml");
        assert!(matches!(missing, Err(CompareError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_invalid_configs() {
        let registry = Registry::global();
        for delta in [0.0, -0.1, f64::NAN, f64::INFINITY, 1.5] {
            let err = SweepConfig::with_delta(delta).validate(registry).unwrap_err();
            assert!(matches!(err, CompareError::InvalidDelta { .. }), "{delta}");
        }

        for delta in [1e-4, 1e-20, f64::MIN_POSITIVE, 5e-324] {
            let err = SweepConfig::with_delta(delta).validate(registry).unwrap_err();
            assert!(matches!(err, CompareError::TooManyCandidates { .. }), "{delta}");
        }

        let config = SweepConfig { methods: vec![], ..SweepConfig::default() };
        assert!(matches!(config.validate(registry), Err(CompareError::NoMethods)));

        let config = SweepConfig { methods: vec!["nope".into()], ..SweepConfig::default() };
        assert!(matches!(config.validate(registry), Err(CompareError::Map(_))));

        let config = SweepConfig { targets: vec![], ..SweepConfig::default() };
        assert!(matches!(config.validate(registry), Err(CompareError::NoTargets)));

        let config = SweepConfig { progress_interval: 0, ..SweepConfig::default() };
        assert!(matches!(config.validate(registry), Err(CompareError::InvalidProgressInterval)));
    }

    #[test]
    fn test_result_keys() {
        let keys = SweepConfig::default().result_keys(Registry::global()).unwrap();
        assert_eq!(keys[0], "edgeToP3");
        assert_eq!(keys[1], "edgeToSrgb");
        assert!(keys.contains(&"chromiumToSrgb".to_string()));
        assert!(keys.contains(&"clipToP3".to_string()));
        assert_eq!(keys.len(), 10);
    }
}
