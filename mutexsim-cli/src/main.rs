use clap::Parser;
use env_logger::Env;
use log::info;
use mutexsim_common::{
    parse_duration, SimulationConfig, DEFAULT_CRITICAL_SECTION_LENGTH, DEFAULT_EVENTS_PER_SECOND,
    DEFAULT_TOTAL_EVENTS,
};
use rand::Rng;
use std::io::Write;
use std::process;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "mutexsim",
    about = "Estimate mutex wait latency under Poisson arrivals"
)]
struct Args {
    /// Length of the simulated critical section (e.g. 500us, 1.5ms, 2s)
    #[arg(long, default_value = DEFAULT_CRITICAL_SECTION_LENGTH, value_parser = parse_duration)]
    critical_section_length: Duration,

    /// Number of requests to access the critical section per second
    #[arg(long, default_value_t = DEFAULT_EVENTS_PER_SECOND)]
    events_per_second: u64,

    /// Seed for the arrival generator; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Number of arrivals to simulate
    #[arg(long, default_value_t = DEFAULT_TOTAL_EVENTS)]
    total_events: usize,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = simulate(&args) {
        eprintln!("mutexsim: {e}");
        process::exit(1);
    }
}

/// Run the simulation described by `args` and write the JSON report to stdout.
fn simulate(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = SimulationConfig::new(
        args.critical_section_length.as_secs_f64(),
        args.events_per_second as f64,
        args.total_events,
    )?;

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Using seed {seed}; pass --seed {seed} to reproduce this run");

    let report = mutexsim_engine::run_seeded(&config, seed)?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, &report)?;
    writeln!(stdout)?;
    Ok(())
}
