//! Stopwatch configuration

/// Environment variable enabling per-lap trace events
pub const TRACE_LAPS_ENV: &str = "LAPWATCH_TRACE_LAPS";
/// Environment variable providing a default stopwatch label
pub const LABEL_ENV: &str = "LAPWATCH_LABEL";

/// Configuration for a [`LapStopwatch`](crate::LapStopwatch)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwatchConfig {
    /// Emit a `trace` event for every recorded lap
    pub trace_laps: bool,
    /// Label attached to log events and reports
    pub label: Option<String>,
}

impl StopwatchConfig {
    /// Create configuration from environment variables
    pub fn from_environment() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            trace_laps: lookup(TRACE_LAPS_ENV).and_then(|v| v.parse().ok()).unwrap_or(false),
            label: lookup(LABEL_ENV).filter(|v| !v.is_empty()),
        }
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Enable or disable per-lap trace events
    pub fn with_trace_laps(mut self, trace_laps: bool) -> Self {
        self.trace_laps = trace_laps;
        self
    }
}
