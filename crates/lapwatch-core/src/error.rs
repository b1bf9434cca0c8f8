//! Error handling for stopwatch queries
//!
//! Every failure is a caller error raised synchronously at the offending call.
//! The stopwatch never recovers from, retries or logs these itself.

use thiserror::Error;

/// Errors returned by [`LapStopwatch`](crate::LapStopwatch) queries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StopwatchError {
    /// The final duration was requested before the watch was stopped
    #[error("the stopwatch has not been stopped")]
    NotStopped,

    /// No lap was ever recorded under the requested name
    #[error("no lap with name `{name}` exists")]
    UnknownLap { name: String },

    /// The lap name is known but the requested index is not
    #[error("lap `{name}` has no index {index} ({len} recorded)")]
    LapIndexOutOfRange { name: String, index: usize, len: usize },
}

impl StopwatchError {
    /// Get the error category for logging and metrics
    pub fn category(&self) -> &'static str {
        match self {
            StopwatchError::NotStopped => "invalid_state",
            StopwatchError::UnknownLap { .. } => "unknown_key",
            StopwatchError::LapIndexOutOfRange { .. } => "out_of_range",
        }
    }

    /// Create an unknown-lap error
    pub fn unknown_lap(name: impl Into<String>) -> Self {
        StopwatchError::UnknownLap { name: name.into() }
    }

    /// Create an index-out-of-range error
    pub fn index_out_of_range(name: impl Into<String>, index: usize, len: usize) -> Self {
        StopwatchError::LapIndexOutOfRange { name: name.into(), index, len }
    }
}

/// Result type alias for stopwatch queries
pub type StopwatchResult<T> = Result<T, StopwatchError>;
