use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::hours_between;
use crate::core::{
    BarType, ChartDimensions, DragEdge, DragState, PeriodBounds, PeriodChanges, PeriodConfig,
    PeriodGap,
};

/// Flat discriminant of `InteractionState`, handy for logging and listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    HoveringPeriod,
    HoveringGap,
    Dragging,
    DialogEdit,
    DialogAdd,
}

/// Where a period added from a gap may be placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AddPeriodContext {
    pub after_period_index: usize,
    pub earliest_start: DateTime<Utc>,
    pub latest_end: DateTime<Utc>,
}

impl AddPeriodContext {
    #[must_use]
    pub fn from_gap(gap: PeriodGap) -> Self {
        Self {
            after_period_index: gap.after_period_index,
            earliest_start: gap.start,
            latest_end: gap.end,
        }
    }

    #[must_use]
    pub fn available_hours(&self) -> f64 {
        hours_between(self.earliest_start, self.latest_end)
    }

    #[must_use]
    pub fn accepts(&self, draft: PeriodDraft) -> bool {
        draft.start_time >= self.earliest_start && draft.eating_end <= self.latest_end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DialogMode {
    Edit { period_index: usize },
    Add(AddPeriodContext),
}

/// Interaction state of the editor. Starts as `Idle` and always returns there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    HoveringPeriod {
        period_index: usize,
    },
    HoveringGap {
        gap: PeriodGap,
    },
    Dragging(DragState),
    DialogOpen(DialogMode),
}

impl InteractionState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        match self {
            Self::Idle => InteractionMode::Idle,
            Self::HoveringPeriod { .. } => InteractionMode::HoveringPeriod,
            Self::HoveringGap { .. } => InteractionMode::HoveringGap,
            Self::Dragging(_) => InteractionMode::Dragging,
            Self::DialogOpen(DialogMode::Edit { .. }) => InteractionMode::DialogEdit,
            Self::DialogOpen(DialogMode::Add(_)) => InteractionMode::DialogAdd,
        }
    }

    #[must_use]
    pub fn hovered_period_index(&self) -> Option<usize> {
        match self {
            Self::HoveringPeriod { period_index } => Some(*period_index),
            _ => None,
        }
    }

    #[must_use]
    pub fn hovered_gap(&self) -> Option<PeriodGap> {
        match self {
            Self::HoveringGap { gap } => Some(*gap),
            _ => None,
        }
    }

    #[must_use]
    pub fn drag_state(&self) -> Option<&DragState> {
        match self {
            Self::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    #[must_use]
    pub fn dialog_mode(&self) -> Option<DialogMode> {
        match self {
            Self::DialogOpen(mode) => Some(*mode),
            _ => None,
        }
    }

    /// Idle and hover states accept new hovers, drags and clicks.
    #[must_use]
    pub fn accepts_pointer_entry(&self) -> bool {
        matches!(
            self,
            Self::Idle | Self::HoveringPeriod { .. } | Self::HoveringGap { .. }
        )
    }
}

/// Period times as entered in the add/edit dialog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodDraft {
    pub start_time: DateTime<Utc>,
    pub fasting_end: DateTime<Utc>,
    pub eating_end: DateTime<Utc>,
}

impl PeriodDraft {
    #[must_use]
    pub fn new(
        start_time: DateTime<Utc>,
        fasting_end: DateTime<Utc>,
        eating_end: DateTime<Utc>,
    ) -> Self {
        Self {
            start_time,
            fasting_end,
            eating_end,
        }
    }

    #[must_use]
    pub fn from_period(period: &PeriodConfig) -> Self {
        Self {
            start_time: period.start_time,
            fasting_end: period.fasting_end(),
            eating_end: period.end_time(),
        }
    }

    #[must_use]
    pub fn fasting_duration(&self) -> f64 {
        hours_between(self.start_time, self.fasting_end)
    }

    #[must_use]
    pub fn eating_window(&self) -> f64 {
        hours_between(self.fasting_end, self.eating_end)
    }

    #[must_use]
    pub fn fits_bounds(&self, bounds: PeriodBounds) -> bool {
        bounds.fasting_in_bounds(self.fasting_duration())
            && bounds.eating_in_bounds(self.eating_window())
    }

    #[must_use]
    pub fn to_period(&self) -> PeriodConfig {
        PeriodConfig::new(
            self.start_time,
            self.fasting_duration(),
            self.eating_window(),
        )
    }

    /// Fields of `self` that differ from `period`.
    #[must_use]
    pub fn changes_from(&self, period: &PeriodConfig) -> PeriodChanges {
        let mut changes = PeriodChanges::default();
        let candidate = self.to_period();
        if candidate.start_time != period.start_time {
            changes.start_time = Some(candidate.start_time);
        }
        if candidate.fasting_duration != period.fasting_duration {
            changes.fasting_duration = Some(candidate.fasting_duration);
        }
        if candidate.eating_window != period.eating_window {
            changes.eating_window = Some(candidate.eating_window);
        }
        changes
    }
}

/// Discrete input vocabulary of the editor.
///
/// Pointer and dialog input is translated into these events by the host; the
/// host also resolves overlapping resize zones before sending `DragStart`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorEvent {
    HoverPeriod {
        period_index: usize,
    },
    HoverGap {
        after_period_index: usize,
    },
    HoverExit,
    DragStart {
        period_index: usize,
        edge: DragEdge,
        bar: BarType,
        pointer_x: f64,
    },
    DragMove {
        pointer_x: f64,
    },
    DragEnd,
    ClickPeriod {
        period_index: usize,
    },
    ClickGap {
        after_period_index: usize,
    },
    DialogSave(PeriodDraft),
    DialogDelete,
    DialogCancel,
    UpdatePeriodConfigs(Vec<PeriodConfig>),
    UpdateChartDimensions(ChartDimensions),
}

impl EditorEvent {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::HoverPeriod { .. } => "hover_period",
            Self::HoverGap { .. } => "hover_gap",
            Self::HoverExit => "hover_exit",
            Self::DragStart { .. } => "drag_start",
            Self::DragMove { .. } => "drag_move",
            Self::DragEnd => "drag_end",
            Self::ClickPeriod { .. } => "click_period",
            Self::ClickGap { .. } => "click_gap",
            Self::DialogSave(_) => "dialog_save",
            Self::DialogDelete => "dialog_delete",
            Self::DialogCancel => "dialog_cancel",
            Self::UpdatePeriodConfigs(_) => "update_period_configs",
            Self::UpdateChartDimensions(_) => "update_chart_dimensions",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DialogMode, EditorEvent, InteractionMode, InteractionState, PeriodDraft};
    use crate::core::{PeriodBounds, PeriodConfig};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn event_names_are_snake_case_tags() {
        assert_eq!(EditorEvent::DragMove { pointer_x: 4.0 }.name(), "drag_move");
        assert_eq!(EditorEvent::DialogCancel.name(), "dialog_cancel");
        assert_eq!(
            EditorEvent::UpdatePeriodConfigs(Vec::new()).name(),
            "update_period_configs"
        );
    }

    #[test]
    fn default_state_is_idle() {
        let state = InteractionState::default();
        assert_eq!(state.mode(), InteractionMode::Idle);
        assert!(state.accepts_pointer_entry());
    }

    #[test]
    fn dialog_state_blocks_pointer_entry() {
        let state = InteractionState::DialogOpen(DialogMode::Edit { period_index: 2 });
        assert_eq!(state.mode(), InteractionMode::DialogEdit);
        assert!(!state.accepts_pointer_entry());
        assert_eq!(state.hovered_period_index(), None);
    }

    #[test]
    fn draft_derives_durations_from_times() {
        let t0 = Utc.with_ymd_and_hms(2024, 2, 1, 20, 0, 0).unwrap();
        let draft = PeriodDraft::new(t0, t0 + Duration::hours(18), t0 + Duration::minutes(1410));
        assert_eq!(draft.fasting_duration(), 18.0);
        assert_eq!(draft.eating_window(), 5.5);
        assert!(draft.fits_bounds(PeriodBounds::default()));
    }

    #[test]
    fn changes_only_carry_modified_fields() {
        let t0 = Utc.with_ymd_and_hms(2024, 2, 1, 20, 0, 0).unwrap();
        let period = PeriodConfig::new(t0, 16.0, 8.0);
        let draft = PeriodDraft::new(t0, t0 + Duration::hours(17), t0 + Duration::hours(24));

        let changes = draft.changes_from(&period);
        assert_eq!(changes.start_time, None);
        assert_eq!(changes.fasting_duration, Some(17.0));
        assert_eq!(changes.eating_window, Some(7.0));

        assert!(PeriodDraft::from_period(&period).changes_from(&period).is_empty());
    }
}
