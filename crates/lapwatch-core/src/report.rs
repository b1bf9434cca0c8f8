//! Serializable stopwatch snapshots
//!
//! Durations are exported as whole microseconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Point-in-time snapshot of a stopwatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopwatchReport {
    /// Label from the stopwatch configuration
    pub label: Option<String>,
    /// Wall-clock time the stopwatch was started
    pub created_at: DateTime<Utc>,
    /// Elapsed time when the snapshot was taken (microseconds)
    pub elapsed_us: u64,
    /// Final duration, if the stopwatch was stopped (microseconds)
    pub final_us: Option<u64>,
    /// Recorded laps, sorted by name
    pub laps: Vec<LapSeries>,
}

/// All durations recorded under one lap name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LapSeries {
    /// Lap name
    pub name: String,
    /// Durations since start in call order (microseconds)
    pub times_us: Vec<u64>,
}

impl StopwatchReport {
    /// Look up the series for a lap name
    pub fn lap(&self, name: &str) -> Option<&LapSeries> {
        self.laps.iter().find(|series| series.name == name)
    }
}

/// Convert a duration to whole microseconds, saturating at `u64::MAX`
pub(crate) fn as_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_micros_truncates_and_saturates() {
        assert_eq!(as_micros(Duration::from_nanos(1_999)), 1);
        assert_eq!(as_micros(Duration::MAX), u64::MAX);
    }

    #[test]
    fn test_lap_lookup() {
        let report = StopwatchReport {
            label: None,
            created_at: Utc::now(),
            elapsed_us: 10,
            final_us: None,
            laps: vec![LapSeries { name: "load".to_string(), times_us: vec![3, 7] }],
        };

        assert_eq!(report.lap("load").map(|s| s.times_us.as_slice()), Some(&[3, 7][..]));
        assert!(report.lap("save").is_none());
    }
}
