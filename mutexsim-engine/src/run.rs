use log::{debug, info};
use mutexsim_common::{Report, Result, SimulationConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use crate::arrivals::generate_arrivals;
use crate::simulator::simulate;
use crate::summary::summarize;

/// Generate arrivals from `rng`, push them through the critical section and
/// summarize the resulting latencies.
pub fn run(config: &SimulationConfig, rng: &mut impl Rng) -> Result<Report> {
    let crit = config.critical_section_secs();

    let stage_start = Instant::now();
    let arrivals = generate_arrivals(config.total_events(), config.total_duration_secs(), rng);
    debug!(
        "Generated {} arrivals over {:.3}s in {:?}",
        arrivals.len(),
        config.total_duration_secs(),
        stage_start.elapsed()
    );

    let stage_start = Instant::now();
    let latencies = simulate(&arrivals, crit)?;
    drop(arrivals);
    debug!("Simulated critical section in {:?}", stage_start.elapsed());

    let stage_start = Instant::now();
    let summary = summarize(latencies, crit)?;
    debug!("Summarized latencies in {:?}", stage_start.elapsed());

    Ok(summary.into_report(config))
}

/// [`run`] with a `StdRng` seeded from `seed`. Same config and seed give a
/// bit-identical report.
pub fn run_seeded(config: &SimulationConfig, seed: u64) -> Result<Report> {
    info!(
        "Simulating crit={}s eps={} events={} seed={}",
        config.critical_section_secs(),
        config.events_per_second(),
        config.total_events(),
        seed
    );
    let mut rng = StdRng::seed_from_u64(seed);
    run(config, &mut rng)
}
