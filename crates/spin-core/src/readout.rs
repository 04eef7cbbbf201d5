use std::fmt;

use crate::estimator::Metrics;

/// Display strings for the two metrics, e.g. `Speed: 0.16` / `Cumulate: 0.02`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readout {
    pub speed: String,
    pub cumulate: String,
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.speed, self.cumulate)
    }
}

pub fn format_readout(metrics: &Metrics, decimals: usize) -> Readout {
    Readout {
        speed: format!("Speed: {:.*}", decimals, metrics.angular_speed),
        cumulate: format!("Cumulate: {:.*}", decimals, metrics.cumulative_revolutions),
    }
}
