#![deny(warnings)]
//! Lap-recording stopwatch for ad-hoc timing inside application code.
//!
//! A [`LapStopwatch`] is started once, records named laps as durations since
//! its start, and can be stopped to obtain a final duration. It is a plain
//! single-threaded value; wrap it in a `Mutex` to share it.
//!
//! ```
//! use lapwatch_core::LapStopwatch;
//!
//! let mut watch = LapStopwatch::start();
//! watch.lap("parse");
//! watch.lap("load");
//!
//! let between = watch.difference("parse", "load").unwrap();
//! assert!(between <= watch.lap_time("load").unwrap());
//!
//! let total = watch.final_elapsed_or_stop();
//! assert_eq!(watch.final_elapsed(), Ok(total));
//! ```

/// Instant sources, including a manually driven clock for tests
pub mod clock;
/// Stopwatch configuration
pub mod config;
/// Error types for stopwatch queries
pub mod error;
/// Serializable stopwatch snapshots
pub mod report;
/// The lap-recording stopwatch
pub mod stopwatch;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::StopwatchConfig;
pub use error::{StopwatchError, StopwatchResult};
pub use report::{LapSeries, StopwatchReport};
pub use stopwatch::LapStopwatch;
