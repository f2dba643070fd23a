use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::PeriodConfig;
use crate::core::period_index::non_deleted_indices;
use crate::core::primitives::hours_between;

/// Idle interval between two consecutive non-deleted periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodGap {
    pub after_period_index: usize,
    pub before_period_index: usize,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl PeriodGap {
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        hours_between(self.start, self.end)
    }
}

/// Derives the gaps between consecutive non-deleted periods, in timeline order.
///
/// Adjacent periods (end == next start) and overlapping ones produce no gap.
#[must_use]
pub fn compute_gaps(configs: &[PeriodConfig]) -> Vec<PeriodGap> {
    let mut gaps = Vec::new();
    let mut previous: Option<usize> = None;

    for index in non_deleted_indices(configs) {
        if let Some(prev_index) = previous {
            let prev_end = configs[prev_index].end_time();
            let next_start = configs[index].start_time;
            if prev_end < next_start {
                gaps.push(PeriodGap {
                    after_period_index: prev_index,
                    before_period_index: index,
                    start: prev_end,
                    end: next_start,
                });
            }
        }
        previous = Some(index);
    }

    gaps
}

#[must_use]
pub fn find_gap_after(configs: &[PeriodConfig], after_period_index: usize) -> Option<PeriodGap> {
    compute_gaps(configs)
        .into_iter()
        .find(|gap| gap.after_period_index == after_period_index)
}

#[cfg(test)]
mod tests {
    use super::{compute_gaps, find_gap_after};
    use crate::core::PeriodConfig;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn contiguous_periods_have_no_gaps() {
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 20, 0, 0).unwrap();
        let configs = vec![
            PeriodConfig::new(t0, 16.0, 8.0),
            PeriodConfig::new(t0 + Duration::hours(24), 18.0, 6.0),
        ];
        assert!(compute_gaps(&configs).is_empty());
    }

    #[test]
    fn gap_spans_end_to_next_start_across_deleted_entries() {
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 20, 0, 0).unwrap();
        let configs = vec![
            PeriodConfig::new(t0, 16.0, 8.0),
            PeriodConfig::new(t0 + Duration::hours(24), 16.0, 8.0).with_deleted(true),
            PeriodConfig::new(t0 + Duration::hours(30), 16.0, 8.0),
        ];

        let gaps = compute_gaps(&configs);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].after_period_index, 0);
        assert_eq!(gaps[0].before_period_index, 2);
        assert_eq!(gaps[0].duration_hours(), 6.0);

        assert!(find_gap_after(&configs, 0).is_some());
        assert!(find_gap_after(&configs, 1).is_none());
    }
}
