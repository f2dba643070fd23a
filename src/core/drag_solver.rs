use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::period_index::{find_next_non_deleted, find_previous_non_deleted, live_period};
use crate::core::primitives::add_hours;
use crate::core::{PeriodBounds, PeriodChanges, PeriodConfig, PeriodUpdate};

/// Sub-segment of a period that owns the dragged edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarType {
    Fasting,
    Eating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragEdge {
    Left,
    Right,
}

/// Timeline boundary that a `(bar, edge)` pair actually moves.
///
/// Fasting-right and eating-left are two handles on the same boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragHandle {
    PeriodStart,
    FastingEatingBoundary,
    PeriodEnd,
}

impl DragHandle {
    #[must_use]
    pub fn resolve(bar: BarType, edge: DragEdge) -> Self {
        match (bar, edge) {
            (BarType::Fasting, DragEdge::Left) => Self::PeriodStart,
            (BarType::Fasting, DragEdge::Right) | (BarType::Eating, DragEdge::Left) => {
                Self::FastingEatingBoundary
            }
            (BarType::Eating, DragEdge::Right) => Self::PeriodEnd,
        }
    }
}

/// Frozen copy of a neighbor taken at drag start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeighborSnapshot {
    pub index: usize,
    pub period: PeriodConfig,
}

/// Transient state of one drag session.
///
/// All delta math runs against the frozen `original`/`previous`/`next`
/// values, never against configs mutated mid-drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    pub period_index: usize,
    pub bar: BarType,
    pub edge: DragEdge,
    pub start_x: f64,
    pub original: PeriodConfig,
    pub previous: Option<NeighborSnapshot>,
    pub next: Option<NeighborSnapshot>,
    /// Last accepted hour delta.
    pub hour_delta: f64,
}

impl DragState {
    /// Freezes the dragged period and its live neighbors.
    ///
    /// Returns `None` when `period_index` is out of range or soft-deleted.
    #[must_use]
    pub fn capture(
        configs: &[PeriodConfig],
        period_index: usize,
        bar: BarType,
        edge: DragEdge,
        start_x: f64,
    ) -> Option<Self> {
        let original = live_period(configs, period_index)?;

        let snapshot = |index: usize| NeighborSnapshot {
            index,
            period: configs[index],
        };
        let previous = find_previous_non_deleted(configs, period_index).map(snapshot);
        let next = find_next_non_deleted(configs, period_index).map(snapshot);

        Some(Self {
            period_index,
            bar,
            edge,
            start_x,
            original,
            previous,
            next,
            hour_delta: 0.0,
        })
    }

    #[must_use]
    pub fn handle(&self) -> DragHandle {
        DragHandle::resolve(self.bar, self.edge)
    }

    #[must_use]
    pub fn has_previous_period(&self) -> bool {
        self.previous.is_some()
    }

    #[must_use]
    pub fn has_next_period(&self) -> bool {
        self.next.is_some()
    }
}

/// At most two periods are touched by a single drag.
pub type DragUpdates = SmallVec<[PeriodUpdate; 2]>;

/// Computes the patch list for `hour_delta` applied to the drag's frozen originals.
///
/// The nearest live neighbor absorbs the moved boundary whether or not a gap
/// separates it. A next neighbor always restarts at the new period end.
///
/// Returns `None` when any touched duration would leave `bounds` or when the
/// delta is not finite. Nothing is partially applied.
#[must_use]
pub fn compute_updates(
    drag: &DragState,
    hour_delta: f64,
    bounds: PeriodBounds,
) -> Option<DragUpdates> {
    if !hour_delta.is_finite() {
        return None;
    }

    let original = drag.original;
    let mut updates = DragUpdates::new();

    match drag.handle() {
        DragHandle::PeriodStart => {
            let fasting = original.fasting_duration - hour_delta;
            if !bounds.fasting_in_bounds(fasting) {
                return None;
            }
            let start_time = add_hours(original.start_time, hour_delta);

            if let Some(previous) = drag.previous {
                let eating = previous.period.eating_window + hour_delta;
                if !bounds.eating_in_bounds(eating) {
                    return None;
                }
                updates.push(PeriodUpdate::new(
                    previous.index,
                    PeriodChanges::default().with_eating_window(eating),
                ));
            }

            updates.push(PeriodUpdate::new(
                drag.period_index,
                PeriodChanges::default()
                    .with_start_time(start_time)
                    .with_fasting_duration(fasting),
            ));
        }
        DragHandle::FastingEatingBoundary => {
            let fasting = original.fasting_duration + hour_delta;
            let eating = original.eating_window - hour_delta;
            if !bounds.fasting_in_bounds(fasting) || !bounds.eating_in_bounds(eating) {
                return None;
            }
            updates.push(PeriodUpdate::new(
                drag.period_index,
                PeriodChanges::default()
                    .with_fasting_duration(fasting)
                    .with_eating_window(eating),
            ));
        }
        DragHandle::PeriodEnd => {
            let eating = original.eating_window + hour_delta;
            if !bounds.eating_in_bounds(eating) {
                return None;
            }
            let end_time = add_hours(original.start_time, original.fasting_duration + eating);

            let mut next_update = None;
            if let Some(next) = drag.next {
                let fasting = next.period.fasting_duration - hour_delta;
                if !bounds.fasting_in_bounds(fasting) {
                    return None;
                }
                next_update = Some(PeriodUpdate::new(
                    next.index,
                    PeriodChanges::default()
                        .with_start_time(end_time)
                        .with_fasting_duration(fasting),
                ));
            }

            updates.push(PeriodUpdate::new(
                drag.period_index,
                PeriodChanges::default().with_eating_window(eating),
            ));
            updates.extend(next_update);
        }
    }

    Some(updates)
}
