use tracing::{debug, warn};

use crate::core::{ChartDimensions, PeriodConfig, find_gap_after, live_period};
use crate::interaction::InteractionState;

use super::PeriodEditor;
use super::validation::validate_period_configs;

impl PeriodEditor {
    /// Replaces the held period snapshot with the owner's current array.
    ///
    /// The owner is the source of truth, so an array that breaks the timeline
    /// invariants is still accepted and only reported.
    pub fn update_period_configs(&mut self, periods: Vec<PeriodConfig>) {
        debug!(count = periods.len(), "replace period configs");
        if let Err(err) = validate_period_configs(&periods, self.bounds) {
            warn!(error = %err, "accepting period configs that violate timeline invariants");
        }
        if matches!(self.state, InteractionState::Dragging(_)) {
            warn!("period configs replaced during an active drag; neighbor snapshots may be stale");
        }
        self.periods = periods;
        self.drop_stale_hover();
    }

    pub fn update_chart_dimensions(&mut self, dimensions: ChartDimensions) {
        if let Err(err) = dimensions.validate() {
            warn!(error = %err, "ignoring invalid chart dimensions");
            return;
        }
        debug!(
            chart_width = dimensions.chart_width,
            grid_width = dimensions.grid_width,
            "replace chart dimensions"
        );
        self.chart_dimensions = dimensions;
    }

    fn drop_stale_hover(&mut self) {
        let stale = match self.state {
            InteractionState::HoveringPeriod { period_index } => {
                live_period(&self.periods, period_index).is_none()
            }
            InteractionState::HoveringGap { gap } => {
                find_gap_after(&self.periods, gap.after_period_index) != Some(gap)
            }
            _ => false,
        };
        if stale {
            self.state = InteractionState::Idle;
        }
    }
}
