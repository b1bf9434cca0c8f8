//! The lap-recording stopwatch
//!
//! A [`LapStopwatch`] captures its start instant on construction and from then
//! on measures everything relative to it: named laps, the current elapsed
//! time and, once stopped, the final duration.
//!
//! The stopwatch does no internal locking. Share it between threads by
//! wrapping it in a `Mutex` at the call site.

use crate::clock::{Clock, MonotonicClock};
use crate::config::StopwatchConfig;
use crate::error::{StopwatchError, StopwatchResult};
use crate::report::{LapSeries, StopwatchReport, as_micros};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Stopwatch recording named laps as durations since its start
#[derive(Debug)]
pub struct LapStopwatch<C: Clock = MonotonicClock> {
    clock: C,
    start: Instant,
    end: Option<Instant>,
    /// Durations since `start`, in call order per name
    laps: HashMap<String, Vec<Duration>>,
    created_at: DateTime<Utc>,
    config: StopwatchConfig,
}

impl LapStopwatch {
    /// Start a new stopwatch on the system monotonic clock
    pub fn start() -> Self {
        Self::start_with_config(MonotonicClock, StopwatchConfig::default())
    }
}

impl<C: Clock> LapStopwatch<C> {
    /// Start a new stopwatch reading instants from `clock`
    pub fn start_with_clock(clock: C) -> Self {
        Self::start_with_config(clock, StopwatchConfig::default())
    }

    /// Start a new stopwatch with explicit clock and configuration
    pub fn start_with_config(clock: C, config: StopwatchConfig) -> Self {
        let start = clock.now();
        debug!(label = config.label.as_deref(), "Starting stopwatch");
        Self { clock, start, end: None, laps: HashMap::new(), created_at: Utc::now(), config }
    }

    /// Stop the stopwatch, overwriting any earlier stop instant
    pub fn stop(&mut self) {
        let end = self.clock.now();
        self.end = Some(end);
        debug!(
            label = self.config.label.as_deref(),
            elapsed_us = as_micros(end.saturating_duration_since(self.start)),
            "Stopped stopwatch"
        );
    }

    /// Whether [`stop`](Self::stop) has been called
    pub fn is_stopped(&self) -> bool {
        self.end.is_some()
    }

    /// Record the time since start under `name`
    ///
    /// Repeated laps with the same name are appended in call order.
    pub fn lap(&mut self, name: impl Into<String>) {
        let elapsed = self.current();
        let name = name.into();

        if self.config.trace_laps {
            trace!(
                label = self.config.label.as_deref(),
                lap = %name,
                index = self.lap_count(&name),
                elapsed_us = as_micros(elapsed),
                "Recorded lap"
            );
        }

        self.laps.entry(name).or_default().push(elapsed);
    }

    /// Duration between start and stop
    ///
    /// Fails with [`StopwatchError::NotStopped`] if the watch was never stopped.
    pub fn final_elapsed(&self) -> StopwatchResult<Duration> {
        self.end
            .map(|end| end.saturating_duration_since(self.start))
            .ok_or(StopwatchError::NotStopped)
    }

    /// Duration between start and stop, stopping first when `do_stop` is set
    /// and the watch is still running
    pub fn final_elapsed_with(&mut self, do_stop: bool) -> StopwatchResult<Duration> {
        if do_stop && !self.is_stopped() {
            self.stop();
        }
        self.final_elapsed()
    }

    /// Duration between start and stop, stopping the watch if needed
    pub fn final_elapsed_or_stop(&mut self) -> Duration {
        if !self.is_stopped() {
            self.stop();
        }
        self.final_elapsed().unwrap_or_default()
    }

    /// Duration between start and now
    pub fn current(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.start)
    }

    /// First duration recorded under `name`
    pub fn lap_time(&self, name: &str) -> StopwatchResult<Duration> {
        self.lap_time_at(name, 0)
    }

    /// Duration recorded under `name` at `index`, in call order
    pub fn lap_time_at(&self, name: &str, index: usize) -> StopwatchResult<Duration> {
        let times = self.lap_times(name)?;
        times
            .get(index)
            .copied()
            .ok_or_else(|| StopwatchError::index_out_of_range(name, index, times.len()))
    }

    /// All durations recorded under `name`, in call order
    pub fn lap_times(&self, name: &str) -> StopwatchResult<&[Duration]> {
        self.laps
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| StopwatchError::unknown_lap(name))
    }

    /// Number of laps recorded under `name`
    pub fn lap_count(&self, name: &str) -> usize {
        self.laps.get(name).map_or(0, Vec::len)
    }

    /// Names of all recorded laps, in no particular order
    pub fn lap_names(&self) -> impl Iterator<Item = &str> {
        self.laps.keys().map(String::as_str)
    }

    /// Absolute difference between the first laps of `first` and `second`
    pub fn difference(&self, first: &str, second: &str) -> StopwatchResult<Duration> {
        self.difference_at(first, 0, second, 0)
    }

    /// Absolute difference between two indexed laps; argument order does not matter
    pub fn difference_at(
        &self,
        first: &str,
        first_index: usize,
        second: &str,
        second_index: usize,
    ) -> StopwatchResult<Duration> {
        let a = self.lap_time_at(first, first_index)?;
        let b = self.lap_time_at(second, second_index)?;
        Ok(a.abs_diff(b))
    }

    /// Configuration this stopwatch was started with
    pub fn config(&self) -> &StopwatchConfig {
        &self.config
    }

    /// Snapshot the stopwatch state
    pub fn report(&self) -> StopwatchReport {
        let mut laps: Vec<LapSeries> = self
            .laps
            .iter()
            .map(|(name, times)| LapSeries {
                name: name.clone(),
                times_us: times.iter().copied().map(as_micros).collect(),
            })
            .collect();
        laps.sort_by(|a, b| a.name.cmp(&b.name));

        StopwatchReport {
            label: self.config.label.clone(),
            created_at: self.created_at,
            elapsed_us: as_micros(self.current()),
            final_us: self.final_elapsed().ok().map(as_micros),
            laps,
        }
    }
}
