use chrono::{DateTime, Duration, Utc};

pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Tolerance used when comparing hour quantities derived from float math.
pub const HOURS_EPSILON: f64 = 1e-9;

/// Converts fractional hours into a millisecond-precision `Duration`.
#[must_use]
pub fn hours_to_duration(hours: f64) -> Duration {
    if !hours.is_finite() {
        return Duration::zero();
    }
    Duration::milliseconds((hours * MILLIS_PER_HOUR).round() as i64)
}

#[must_use]
pub fn duration_to_hours(duration: Duration) -> f64 {
    duration.num_milliseconds() as f64 / MILLIS_PER_HOUR
}

#[must_use]
pub fn add_hours(time: DateTime<Utc>, hours: f64) -> DateTime<Utc> {
    time + hours_to_duration(hours)
}

/// Signed hours from `from` to `to`.
#[must_use]
pub fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    duration_to_hours(to - from)
}
