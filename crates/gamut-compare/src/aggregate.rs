//! Running means of delta records keyed by method and target gamut.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use gamut_color::Gamut;

use crate::delta::DeltaRecord;

/// Aggregate results keyed by `<prefix>To<P3|Srgb|Rec2020>`.
pub type Results = BTreeMap<String, DeltaRecord>;

/// Which number divides the n-th sample in the running mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AverageDivisor {
    /// Number of processed samples so far.
    #[default]
    SampleCount,
    /// Grid sequence index of the candidate (0 reads as 1). Skipped
    /// candidates still advance it, which biases early samples.
    SequenceIndex,
}

impl AverageDivisor {
    /// Divisor for a sample that is the `processed`-th processed one and
    /// sits at grid index `index`.
    pub fn divisor(self, processed: usize, index: usize) -> usize {
        match self {
            Self::SampleCount => processed.max(1),
            Self::SequenceIndex => index.max(1),
        }
    }
}

/// Incremental mean: `average + (value - average) / n`.
///
/// `n = 1` returns `value`.
#[inline]
pub fn running_average(average: f64, value: f64, n: usize) -> f64 {
    if n <= 1 {
        return value;
    }
    average + (value - average) / n as f64
}

/// Result key for a method prefix and target gamut, e.g. `edgeToP3`.
pub fn result_key(prefix: &str, target: Gamut) -> String {
    format!("{prefix}To{}", target.key_suffix())
}

/// Running means for a fixed set of keys.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    results: Results,
}

impl Aggregate {
    /// Zeroed means for `keys`.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            results: keys.into_iter().map(|k| (k.into(), DeltaRecord::default())).collect(),
        }
    }

    /// Folds `record` into the mean stored under `key` with divisor `n`.
    pub fn fold(&mut self, key: &str, record: &DeltaRecord, n: usize) {
        let mean = self.results.entry(key.to_string()).or_default();
        *mean = DeltaRecord {
            l: running_average(mean.l, record.l, n),
            c: running_average(mean.c, record.c, n),
            h: running_average(mean.h, record.h, n),
            delta2000: running_average(mean.delta2000, record.delta2000, n),
        };
    }

    /// Current means.
    pub fn results(&self) -> &Results {
        &self.results
    }

    /// Mean stored under `key`.
    pub fn get(&self, key: &str) -> Option<&DeltaRecord> {
        self.results.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_running_average_is_mean() {
        let values = [3.0, 7.5, -2.0, 10.0, 0.25, 4.0];
        let mut avg = 0.0;
        for (i, v) in values.iter().enumerate() {
            avg = running_average(avg, *v, i + 1);
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        assert_abs_diff_eq!(avg, mean, epsilon = 1e-12);
    }

    #[test]
    fn test_first_sample_replaces() {
        assert_eq!(running_average(123.0, 4.0, 1), 4.0);
        assert_eq!(running_average(123.0, 4.0, 0), 4.0);
    }

    #[test]
    fn test_result_key() {
        assert_eq!(result_key("edge", Gamut::DisplayP3), "edgeToP3");
        assert_eq!(result_key("chromium", Gamut::Srgb), "chromiumToSrgb");
    }

    #[test]
    fn test_divisor_policy() {
        assert_eq!(AverageDivisor::SampleCount.divisor(3, 40), 3);
        assert_eq!(AverageDivisor::SequenceIndex.divisor(3, 40), 40);
        assert_eq!(AverageDivisor::SequenceIndex.divisor(1, 0), 1);
    }

    #[test]
    fn test_aggregate_fold() {
        let mut agg = Aggregate::new(["clipToP3"]);
        assert_eq!(agg.get("clipToP3"), Some(&DeltaRecord::default()));
        agg.fold("clipToP3", &DeltaRecord { l: 2.0, c: 0.2, h: 10.0, delta2000: 4.0 }, 1);
        agg.fold("clipToP3", &DeltaRecord { l: 4.0, c: 0.4, h: 20.0, delta2000: 8.0 }, 2);
        let mean = agg.get("clipToP3").unwrap();
        assert_abs_diff_eq!(mean.l, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mean.c, 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(mean.h, 15.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mean.delta2000, 6.0, epsilon = 1e-12);
    }
}
