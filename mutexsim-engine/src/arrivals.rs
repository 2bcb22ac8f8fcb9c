use rand::Rng;
use rayon::slice::ParallelSliceMut;

/// Draw `total_events` timestamps uniformly over `[0, total_duration_secs)`
/// and return them in ascending order.
///
/// Sorted i.i.d. uniform points over a fixed horizon are the arrival epochs
/// of a homogeneous Poisson process conditioned on its event count.
pub fn generate_arrivals(total_events: usize, total_duration_secs: f64, rng: &mut impl Rng) -> Vec<f64> {
    let mut arrivals: Vec<f64> = (0..total_events)
        .map(|_| rng.gen::<f64>() * total_duration_secs)
        .collect();
    arrivals.par_sort_unstable_by(f64::total_cmp);
    arrivals
}
