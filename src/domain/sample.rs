// Heave sample domain model and the synthetic series generator
use chrono::{DateTime, FixedOffset, TimeDelta};

/// Hours of history shown before "now".
pub const WINDOW_BEFORE_HOURS: i64 = 2;
/// Hours of forecast shown after "now".
pub const WINDOW_AFTER_HOURS: i64 = 24;

const PERIOD_DIVISOR_SECS: f64 = 9000.0;
const LEVEL_OFFSET: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<FixedOffset>,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<FixedOffset>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Simulated heave level at `t`.
pub fn heave_at(t: &DateTime<FixedOffset>) -> f64 {
    let epoch_secs = t.timestamp_micros() as f64 / 1_000_000.0;
    (epoch_secs / PERIOD_DIVISOR_SECS).sin() + LEVEL_OFFSET
}

/// Start and end of the display window around `t0`.
pub fn window(t0: DateTime<FixedOffset>) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
    (
        t0 - TimeDelta::hours(WINDOW_BEFORE_HOURS),
        t0 + TimeDelta::hours(WINDOW_AFTER_HOURS),
    )
}

/// Hourly samples from `t0 - 2h` through the last instant not after `t0 + 24h`.
pub fn generate_samples(t0: DateTime<FixedOffset>) -> Vec<Sample> {
    let (start, end) = window(t0);
    let step = TimeDelta::hours(1);

    let mut samples = Vec::with_capacity((WINDOW_BEFORE_HOURS + WINDOW_AFTER_HOURS + 1) as usize);
    let mut t = start;
    while t <= end {
        samples.push(Sample::new(t, heave_at(&t)));
        t += step;
    }
    samples
}
