use serde::{Deserialize, Serialize};

use crate::core::primitives::HOURS_EPSILON;
use crate::error::{TimelineError, TimelineResult};

pub const MIN_FASTING_DURATION_HOURS: f64 = 1.0;
pub const MAX_FASTING_DURATION_HOURS: f64 = 168.0;
pub const MIN_EATING_WINDOW_HOURS: f64 = 1.0;
pub const MAX_EATING_WINDOW_HOURS: f64 = 24.0;
pub const MIN_PERIODS: usize = 1;

/// Inclusive duration limits enforced on every edited period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodBounds {
    pub min_fasting_hours: f64,
    pub max_fasting_hours: f64,
    pub min_eating_hours: f64,
    pub max_eating_hours: f64,
    /// Minimum number of non-deleted periods that must survive a delete.
    pub min_periods: usize,
}

impl Default for PeriodBounds {
    fn default() -> Self {
        Self {
            min_fasting_hours: MIN_FASTING_DURATION_HOURS,
            max_fasting_hours: MAX_FASTING_DURATION_HOURS,
            min_eating_hours: MIN_EATING_WINDOW_HOURS,
            max_eating_hours: MAX_EATING_WINDOW_HOURS,
            min_periods: MIN_PERIODS,
        }
    }
}

impl PeriodBounds {
    pub fn validate(self) -> TimelineResult<Self> {
        validate_range("fasting", self.min_fasting_hours, self.max_fasting_hours)?;
        validate_range("eating", self.min_eating_hours, self.max_eating_hours)?;
        Ok(self)
    }

    #[must_use]
    pub fn fasting_in_bounds(self, hours: f64) -> bool {
        in_range(hours, self.min_fasting_hours, self.max_fasting_hours)
    }

    #[must_use]
    pub fn eating_in_bounds(self, hours: f64) -> bool {
        in_range(hours, self.min_eating_hours, self.max_eating_hours)
    }

    /// Returns `true` when deleting one more period keeps at least `min_periods`.
    #[must_use]
    pub fn allows_delete(self, non_deleted_count: usize) -> bool {
        non_deleted_count > self.min_periods
    }
}

fn in_range(hours: f64, min: f64, max: f64) -> bool {
    hours.is_finite() && hours >= min - HOURS_EPSILON && hours <= max + HOURS_EPSILON
}

fn validate_range(label: &str, min: f64, max: f64) -> TimelineResult<()> {
    if !min.is_finite() || !max.is_finite() || min <= 0.0 {
        return Err(TimelineError::InvalidBounds(format!(
            "{label} bounds must be finite and > 0"
        )));
    }
    if min > max {
        return Err(TimelineError::InvalidBounds(format!(
            "{label} min ({min}) must not exceed max ({max})"
        )));
    }
    Ok(())
}
