use tracing::debug;

use crate::core::{
    count_non_deleted, find_next_non_deleted, find_previous_non_deleted, live_period,
};
use crate::extensions::EditorNotification;
use crate::interaction::{AddPeriodContext, DialogMode, InteractionState, PeriodDraft};

use super::PeriodEditor;

impl PeriodEditor {
    /// Saves the open dialog. Invalid drafts leave the dialog open.
    pub fn dialog_save(&mut self, draft: PeriodDraft) {
        match self.state.dialog_mode() {
            Some(DialogMode::Edit { period_index }) => self.save_edit(period_index, draft),
            Some(DialogMode::Add(context)) => self.save_add(context, draft),
            None => debug!(mode = ?self.state.mode(), "dialog save ignored without open dialog"),
        }
    }

    /// Deletes the period under edit unless that would drop below `min_periods`.
    pub fn dialog_delete(&mut self) {
        let Some(DialogMode::Edit { period_index }) = self.state.dialog_mode() else {
            debug!(mode = ?self.state.mode(), "dialog delete ignored outside edit dialog");
            return;
        };
        if live_period(&self.periods, period_index).is_none() {
            debug!(period_index, "dialog delete ignored for missing or deleted period");
            return;
        }
        let remaining = count_non_deleted(&self.periods);
        if !self.bounds.allows_delete(remaining) {
            debug!(
                period_index,
                remaining,
                min_periods = self.bounds.min_periods,
                "dialog delete blocked by minimum period count"
            );
            return;
        }

        debug!(period_index, "period deleted");
        self.state = InteractionState::Idle;
        self.emit(EditorNotification::PeriodDeleted { period_index });
    }

    pub fn dialog_cancel(&mut self) {
        if self.state.dialog_mode().is_some() {
            self.state = InteractionState::Idle;
        }
    }

    fn save_edit(&mut self, period_index: usize, draft: PeriodDraft) {
        let Some(period) = live_period(&self.periods, period_index) else {
            debug!(period_index, "edit save ignored for missing or deleted period");
            return;
        };
        if !draft.fits_bounds(self.bounds) {
            debug!(
                period_index,
                fasting_hours = draft.fasting_duration(),
                eating_hours = draft.eating_window(),
                "edit save rejected by duration bounds"
            );
            return;
        }
        if !self.draft_fits_neighbors(period_index, draft) {
            debug!(period_index, "edit save rejected for overlapping a neighbor");
            return;
        }

        let changes = draft.changes_from(&period);
        self.state = InteractionState::Idle;
        if changes.is_empty() {
            debug!(period_index, "edit save without changes");
            return;
        }
        debug!(period_index, "period updated");
        self.emit(EditorNotification::PeriodUpdated {
            period_index,
            changes,
        });
    }

    fn save_add(&mut self, context: AddPeriodContext, draft: PeriodDraft) {
        if !draft.fits_bounds(self.bounds) {
            debug!(
                fasting_hours = draft.fasting_duration(),
                eating_hours = draft.eating_window(),
                "add save rejected by duration bounds"
            );
            return;
        }
        if !context.accepts(draft) {
            debug!(
                after_period_index = context.after_period_index,
                "add save rejected for leaving its gap"
            );
            return;
        }

        debug!(after_period_index = context.after_period_index, "period added");
        self.state = InteractionState::Idle;
        self.emit(EditorNotification::PeriodAdded {
            after_period_index: context.after_period_index,
            new_period: draft.to_period(),
        });
    }

    fn draft_fits_neighbors(&self, period_index: usize, draft: PeriodDraft) -> bool {
        let after_previous = find_previous_non_deleted(&self.periods, period_index)
            .is_none_or(|index| draft.start_time >= self.periods[index].end_time());
        let before_next = find_next_non_deleted(&self.periods, period_index)
            .is_none_or(|index| draft.eating_end <= self.periods[index].start_time);
        after_previous && before_next
    }
}
