use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::add_hours;

/// One fasting + eating entry on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodConfig {
    pub start_time: DateTime<Utc>,
    pub fasting_duration: f64,
    pub eating_window: f64,
    /// Soft-delete marker. Deleted entries keep their index for the session.
    #[serde(default)]
    pub deleted: bool,
}

impl PeriodConfig {
    #[must_use]
    pub fn new(start_time: DateTime<Utc>, fasting_duration: f64, eating_window: f64) -> Self {
        Self {
            start_time,
            fasting_duration,
            eating_window,
            deleted: false,
        }
    }

    #[must_use]
    pub fn with_deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Boundary between the fasting and the eating sub-segment.
    #[must_use]
    pub fn fasting_end(&self) -> DateTime<Utc> {
        add_hours(self.start_time, self.fasting_duration)
    }

    #[must_use]
    pub fn end_time(&self) -> DateTime<Utc> {
        add_hours(self.start_time, self.fasting_duration + self.eating_window)
    }
}

/// Partial patch for one period. `None` fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fasting_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eating_window: Option<f64>,
}

impl PeriodChanges {
    #[must_use]
    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    #[must_use]
    pub fn with_fasting_duration(mut self, hours: f64) -> Self {
        self.fasting_duration = Some(hours);
        self
    }

    #[must_use]
    pub fn with_eating_window(mut self, hours: f64) -> Self {
        self.eating_window = Some(hours);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start_time.is_none() && self.fasting_duration.is_none() && self.eating_window.is_none()
    }

    /// Returns `period` with this patch applied.
    #[must_use]
    pub fn applied_to(&self, period: PeriodConfig) -> PeriodConfig {
        PeriodConfig {
            start_time: self.start_time.unwrap_or(period.start_time),
            fasting_duration: self.fasting_duration.unwrap_or(period.fasting_duration),
            eating_window: self.eating_window.unwrap_or(period.eating_window),
            deleted: period.deleted,
        }
    }
}

/// Changes addressed to a period by its index in the config array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodUpdate {
    pub period_index: usize,
    pub changes: PeriodChanges,
}

impl PeriodUpdate {
    #[must_use]
    pub fn new(period_index: usize, changes: PeriodChanges) -> Self {
        Self {
            period_index,
            changes,
        }
    }

    /// Applies the update in place. Returns `false` when the index is out of range.
    pub fn apply_to(&self, configs: &mut [PeriodConfig]) -> bool {
        match configs.get_mut(self.period_index) {
            Some(period) => {
                *period = self.changes.applied_to(*period);
                true
            }
            None => false,
        }
    }
}

/// Applies a patch list in order and returns how many updates landed.
pub fn apply_period_updates(configs: &mut [PeriodConfig], updates: &[PeriodUpdate]) -> usize {
    updates
        .iter()
        .filter(|update| update.apply_to(configs))
        .count()
}
