use mutexsim_common::{MutexSimError, Report, Result, SimulationConfig};
use rayon::slice::ParallelSliceMut;

/// Mean and nearest-rank percentiles of a latency sequence, expressed as
/// multiples of the critical-section length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileSummary {
    pub p50: f64,
    pub p95: f64,
    pub p99: f64,
    pub mean: f64,
}

impl PercentileSummary {
    pub fn into_report(self, config: &SimulationConfig) -> Report {
        Report {
            crit: config.critical_section_secs(),
            eps: config.events_per_second(),
            p50: self.p50,
            p95: self.p95,
            p99: self.p99,
            avg: self.mean,
        }
    }
}

/// Element at index `floor(n * pct / 100)` of an ascending slice, clamped to
/// the last element. No interpolation.
///
/// Panics if `sorted` is empty.
pub fn percentile(sorted: &[f64], pct: usize) -> f64 {
    let idx = sorted.len() * pct / 100;
    sorted[idx.min(sorted.len() - 1)]
}

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sort `latencies` and reduce them to a [`PercentileSummary`] normalized by
/// `critical_section_secs`.
pub fn summarize(mut latencies: Vec<f64>, critical_section_secs: f64) -> Result<PercentileSummary> {
    if latencies.is_empty() {
        return Err(MutexSimError::EmptySequence);
    }

    let avg = mean(&latencies);
    latencies.par_sort_unstable_by(f64::total_cmp);

    Ok(PercentileSummary {
        p50: percentile(&latencies, 50) / critical_section_secs,
        p95: percentile(&latencies, 95) / critical_section_secs,
        p99: percentile(&latencies, 99) / critical_section_secs,
        mean: avg / critical_section_secs,
    })
}
