use mutexsim_common::{MutexSimError, SimulationConfig};
use mutexsim_engine::summary::{mean, percentile, summarize, PercentileSummary};

#[test]
fn test_percentile_nearest_rank() {
    // n=10: p50 -> index 5, p95 -> index 9, p99 -> index 9
    let sorted: Vec<f64> = (1..=10).map(f64::from).collect();
    assert_eq!(percentile(&sorted, 50), 6.0);
    assert_eq!(percentile(&sorted, 95), 10.0);
    assert_eq!(percentile(&sorted, 99), 10.0);

    // n=100: index equals pct
    let sorted: Vec<f64> = (1..=100).map(f64::from).collect();
    assert_eq!(percentile(&sorted, 50), 51.0);
    assert_eq!(percentile(&sorted, 95), 96.0);
    assert_eq!(percentile(&sorted, 99), 100.0);
}

#[test]
fn test_percentile_clamps_to_last_element() {
    assert_eq!(percentile(&[3.0], 50), 3.0);
    assert_eq!(percentile(&[3.0], 99), 3.0);
    assert_eq!(percentile(&[1.0, 2.0], 100), 2.0);
}

#[test]
fn test_mean() {
    assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
}

#[test]
fn test_summarize_unsorted_input() {
    let latencies = vec![10.0, 3.0, 7.0, 1.0, 9.0, 2.0, 8.0, 4.0, 6.0, 5.0];
    let summary = summarize(latencies, 1.0).unwrap();
    assert_eq!(summary, PercentileSummary { p50: 6.0, p95: 10.0, p99: 10.0, mean: 5.5 });
}

#[test]
fn test_summarize_normalizes_by_critical_section() {
    let latencies = vec![2.0, 4.0, 6.0, 8.0];
    let summary = summarize(latencies, 2.0).unwrap();
    // sorted [2, 4, 6, 8]: p50 -> index 2, p95/p99 -> index 3
    assert_eq!(summary.p50, 3.0);
    assert_eq!(summary.p95, 4.0);
    assert_eq!(summary.p99, 4.0);
    assert_eq!(summary.mean, 2.5);
}

#[test]
fn test_summarize_uniform_latencies() {
    let summary = summarize(vec![0.5; 1_000], 0.5).unwrap();
    assert_eq!(summary, PercentileSummary { p50: 1.0, p95: 1.0, p99: 1.0, mean: 1.0 });
}

#[test]
fn test_percentiles_are_ordered() {
    let latencies: Vec<f64> = (0..1_000).map(|i| ((i * 7_919) % 1_000) as f64 + 1.0).collect();
    let summary = summarize(latencies, 1.0).unwrap();
    assert!(summary.p50 <= summary.p95);
    assert!(summary.p95 <= summary.p99);
}

#[test]
fn test_summarize_empty_is_an_error() {
    assert_eq!(summarize(vec![], 1.0), Err(MutexSimError::EmptySequence));
}

#[test]
fn test_into_report_copies_config() {
    let config = SimulationConfig::new(0.002, 750.0, 10).unwrap();
    let summary = PercentileSummary { p50: 1.0, p95: 2.0, p99: 3.0, mean: 1.5 };
    let report = summary.into_report(&config);

    assert_eq!(report.crit, 0.002);
    assert_eq!(report.eps, 750.0);
    assert_eq!((report.p50, report.p95, report.p99, report.avg), (1.0, 2.0, 3.0, 1.5));
}
