use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod duration;
pub use duration::parse_duration;

/// Number of arrivals simulated per run unless overridden.
pub const DEFAULT_TOTAL_EVENTS: usize = 10_000_000;
pub const DEFAULT_CRITICAL_SECTION_LENGTH: &str = "500us";
pub const DEFAULT_EVENTS_PER_SECOND: u64 = 1_000;

/// Error types for MutexSim operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MutexSimError {
    #[error("Critical section length must be positive and finite, got {0}")]
    InvalidCriticalSectionLength(f64),

    #[error("Events per second must be positive and finite, got {0}")]
    InvalidEventsPerSecond(f64),

    #[error("Total events must be at least 1")]
    InvalidTotalEvents,

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Cannot summarize an empty latency sequence")]
    EmptySequence,

    #[error("Arrival {index} is earlier than the arrival before it")]
    UnsortedArrivals { index: usize },
}

/// Result type for MutexSim operations
pub type Result<T> = std::result::Result<T, MutexSimError>;

/// Parameters of a single simulation run. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    critical_section_secs: f64,
    events_per_second: f64,
    total_events: usize,
}

impl SimulationConfig {
    /// Validate and build a config. Both rates must be finite and strictly positive.
    pub fn new(critical_section_secs: f64, events_per_second: f64, total_events: usize) -> Result<Self> {
        if !(critical_section_secs.is_finite() && critical_section_secs > 0.0) {
            return Err(MutexSimError::InvalidCriticalSectionLength(critical_section_secs));
        }
        if !(events_per_second.is_finite() && events_per_second > 0.0) {
            return Err(MutexSimError::InvalidEventsPerSecond(events_per_second));
        }
        if total_events == 0 {
            return Err(MutexSimError::InvalidTotalEvents);
        }
        Ok(Self { critical_section_secs, events_per_second, total_events })
    }

    pub fn critical_section_secs(&self) -> f64 {
        self.critical_section_secs
    }

    pub fn events_per_second(&self) -> f64 {
        self.events_per_second
    }

    pub fn total_events(&self) -> usize {
        self.total_events
    }

    /// Length of the simulated horizon over which arrivals are spread.
    pub fn total_duration_secs(&self) -> f64 {
        self.total_events as f64 / self.events_per_second
    }
}

/// JSON envelope written to stdout at the end of a run.
///
/// `p50`, `p95`, `p99` and `avg` are multiples of `crit`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub crit: f64,
    pub eps: f64,
    pub p50: f64,
    pub p95: f64,
    pub p99: f64,
    pub avg: f64,
}
