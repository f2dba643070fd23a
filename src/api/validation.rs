use crate::core::{PeriodBounds, PeriodConfig, non_deleted_indices};
use crate::error::{TimelineError, TimelineResult};

/// Checks the timeline invariants over the non-deleted periods.
///
/// Durations must be finite and within `bounds`, and each period must start
/// at or after the end of the previous one.
pub fn validate_period_configs(
    periods: &[PeriodConfig],
    bounds: PeriodBounds,
) -> TimelineResult<()> {
    let mut previous: Option<(usize, &PeriodConfig)> = None;

    for index in non_deleted_indices(periods) {
        let period = &periods[index];
        if !bounds.fasting_in_bounds(period.fasting_duration) {
            return Err(TimelineError::InvalidData(format!(
                "period {index} fasting duration {} is outside [{}, {}]",
                period.fasting_duration, bounds.min_fasting_hours, bounds.max_fasting_hours
            )));
        }
        if !bounds.eating_in_bounds(period.eating_window) {
            return Err(TimelineError::InvalidData(format!(
                "period {index} eating window {} is outside [{}, {}]",
                period.eating_window, bounds.min_eating_hours, bounds.max_eating_hours
            )));
        }
        if let Some((prev_index, prev)) = previous {
            if period.start_time < prev.end_time() {
                return Err(TimelineError::InvalidData(format!(
                    "period {index} starts before period {prev_index} ends"
                )));
            }
        }
        previous = Some((index, period));
    }

    Ok(())
}
