use mutexsim_common::{MutexSimError, Result};

/// A single-occupancy critical section with a fixed hold time.
///
/// The whole FIFO queue is represented by one scalar, the instant at which
/// the section next becomes free. That only holds while arrivals are admitted
/// in non-decreasing time order, every holder takes exactly the same time and
/// there is one server. Variable service times or several servers would need
/// an explicit queue.
#[derive(Debug, Clone)]
pub struct SerialServer {
    critical_section_secs: f64,
    blocked_until: f64,
}

impl SerialServer {
    pub fn new(critical_section_secs: f64) -> Self {
        Self { critical_section_secs, blocked_until: 0.0 }
    }

    /// Admit an arrival at time `t` and return its completion latency
    /// (queueing delay plus the hold time).
    ///
    /// `t` must not be earlier than any previously admitted arrival.
    pub fn admit(&mut self, t: f64) -> f64 {
        if self.blocked_until <= t {
            // Free: runs straight away.
            self.blocked_until = t + self.critical_section_secs;
        } else {
            // Held or queued: finishes one hold after whoever is ahead of it.
            self.blocked_until += self.critical_section_secs;
        }
        self.blocked_until - t
    }

    /// The next instant at which the section is free. Never decreases.
    pub fn blocked_until(&self) -> f64 {
        self.blocked_until
    }
}

/// Run every arrival through a [`SerialServer`] and return the completion
/// latency of each, in the same order as `arrivals`.
///
/// `arrivals` must be sorted ascending. An out-of-order element is reported as
/// [`MutexSimError::UnsortedArrivals`] rather than silently treated as a late
/// arrival.
pub fn simulate(arrivals: &[f64], critical_section_secs: f64) -> Result<Vec<f64>> {
    let mut server = SerialServer::new(critical_section_secs);
    let mut latencies = Vec::with_capacity(arrivals.len());
    let mut previous = f64::NEG_INFINITY;

    for (index, &t) in arrivals.iter().enumerate() {
        if t < previous {
            return Err(MutexSimError::UnsortedArrivals { index });
        }
        previous = t;
        latencies.push(server.admit(t));
    }

    Ok(latencies)
}
