//! Discrete-event estimate of the latency seen by callers contending for a
//! single mutex under Poisson arrivals.
//!
//! Data flows one way: [`arrivals`] produces sorted timestamps, [`simulator`]
//! turns them into completion latencies, and [`summary`] reduces those to
//! normalized percentiles. [`run`] wires the three together.

pub mod arrivals;
pub mod run;
pub mod simulator;
pub mod summary;

pub use run::{run, run_seeded};
