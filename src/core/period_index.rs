use crate::core::PeriodConfig;

/// Nearest non-deleted period before `index`, if any.
#[must_use]
pub fn find_previous_non_deleted(configs: &[PeriodConfig], index: usize) -> Option<usize> {
    let upper = index.min(configs.len());
    configs[..upper].iter().rposition(|period| !period.deleted)
}

/// Nearest non-deleted period after `index`, if any.
#[must_use]
pub fn find_next_non_deleted(configs: &[PeriodConfig], index: usize) -> Option<usize> {
    let lower = index.saturating_add(1);
    if lower >= configs.len() {
        return None;
    }
    configs[lower..]
        .iter()
        .position(|period| !period.deleted)
        .map(|offset| lower + offset)
}

#[must_use]
pub fn count_non_deleted(configs: &[PeriodConfig]) -> usize {
    configs.iter().filter(|period| !period.deleted).count()
}

pub fn non_deleted_indices(configs: &[PeriodConfig]) -> impl Iterator<Item = usize> + '_ {
    configs
        .iter()
        .enumerate()
        .filter(|(_, period)| !period.deleted)
        .map(|(index, _)| index)
}

/// The period at `index` when it exists and is not soft-deleted.
#[must_use]
pub fn live_period(configs: &[PeriodConfig], index: usize) -> Option<PeriodConfig> {
    configs.get(index).copied().filter(|period| !period.deleted)
}
