use tracing::{debug, trace};

use crate::core::{
    BarType, DragEdge, DragState, compute_updates, find_gap_after, live_period, pixels_to_hours,
};
use crate::extensions::EditorNotification;
use crate::interaction::{AddPeriodContext, DialogMode, InteractionState};

use super::PeriodEditor;

impl PeriodEditor {
    pub fn hover_period(&mut self, period_index: usize) {
        if !self.state.accepts_pointer_entry() {
            trace!(mode = ?self.state.mode(), "hover ignored outside idle/hover states");
            return;
        }
        if live_period(&self.periods, period_index).is_none() {
            trace!(period_index, "hover ignored for missing or deleted period");
            return;
        }
        self.state = InteractionState::HoveringPeriod { period_index };
    }

    pub fn hover_gap(&mut self, after_period_index: usize) {
        if !self.state.accepts_pointer_entry() {
            trace!(mode = ?self.state.mode(), "gap hover ignored outside idle/hover states");
            return;
        }
        match find_gap_after(&self.periods, after_period_index) {
            Some(gap) => self.state = InteractionState::HoveringGap { gap },
            None => trace!(after_period_index, "gap hover ignored for unknown gap"),
        }
    }

    pub fn hover_exit(&mut self) {
        if matches!(
            self.state,
            InteractionState::HoveringPeriod { .. } | InteractionState::HoveringGap { .. }
        ) {
            self.state = InteractionState::Idle;
        }
    }

    pub fn click_period(&mut self, period_index: usize) {
        if !self.state.accepts_pointer_entry() {
            trace!(mode = ?self.state.mode(), "period click ignored");
            return;
        }
        if live_period(&self.periods, period_index).is_none() {
            debug!(period_index, "period click ignored for missing or deleted period");
            return;
        }
        debug!(period_index, "opening edit dialog");
        self.state = InteractionState::DialogOpen(DialogMode::Edit { period_index });
    }

    pub fn click_gap(&mut self, after_period_index: usize) {
        if !self.state.accepts_pointer_entry() {
            trace!(mode = ?self.state.mode(), "gap click ignored");
            return;
        }
        let Some(gap) = find_gap_after(&self.periods, after_period_index) else {
            debug!(after_period_index, "gap click ignored for unknown gap");
            return;
        };
        debug!(
            after_period_index,
            gap_hours = gap.duration_hours(),
            "opening add dialog"
        );
        self.state = InteractionState::DialogOpen(DialogMode::Add(AddPeriodContext::from_gap(gap)));
    }

    /// Starts a drag session, freezing the period and its neighbors.
    pub fn drag_start(&mut self, period_index: usize, bar: BarType, edge: DragEdge, pointer_x: f64) {
        if !self.state.accepts_pointer_entry() {
            trace!(mode = ?self.state.mode(), "drag start ignored");
            return;
        }
        if !pointer_x.is_finite() {
            debug!(pointer_x, "drag start ignored for non-finite pointer");
            return;
        }
        let Some(drag) = DragState::capture(&self.periods, period_index, bar, edge, pointer_x)
        else {
            debug!(period_index, "drag start ignored for missing or deleted period");
            return;
        };
        debug!(
            period_index,
            ?bar,
            ?edge,
            has_previous = drag.has_previous_period(),
            has_next = drag.has_next_period(),
            "drag started"
        );
        self.state = InteractionState::Dragging(drag);
    }

    /// Applies the pointer position to the active drag.
    ///
    /// Emits `PeriodsDragUpdated` when the snapped delta is legal; otherwise the
    /// event is dropped and the last legal position stays in effect.
    pub fn drag_move(&mut self, pointer_x: f64) {
        let drag = match &self.state {
            InteractionState::Dragging(drag) => *drag,
            _ => {
                trace!("drag move ignored without active drag");
                return;
            }
        };

        let hour_delta = pixels_to_hours(pointer_x - drag.start_x, self.chart_dimensions.grid_width);
        let Some(updates) = compute_updates(&drag, hour_delta, self.bounds) else {
            trace!(hour_delta, "drag delta rejected");
            return;
        };

        if let InteractionState::Dragging(active) = &mut self.state {
            active.hour_delta = hour_delta;
        }
        trace!(hour_delta, updates = updates.len(), "drag delta accepted");
        self.emit(EditorNotification::PeriodsDragUpdated {
            updates: updates.into_vec(),
        });
    }

    pub fn drag_end(&mut self) {
        if let InteractionState::Dragging(drag) = &self.state {
            debug!(
                period_index = drag.period_index,
                hour_delta = drag.hour_delta,
                "drag ended"
            );
            self.state = InteractionState::Idle;
        }
    }
}
