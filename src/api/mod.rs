mod data_controller;
mod dialog_controller;
mod editor_config;
mod editor_snapshot;
mod interaction_controller;
mod listener_registry;
mod validation;

use tracing::{debug, trace};

use crate::core::{ChartDimensions, PeriodBounds, PeriodConfig};
use crate::error::TimelineResult;
use crate::extensions::PeriodEditorListener;
use crate::interaction::{EditorEvent, InteractionState};

pub use editor_config::{EDITOR_CONFIG_JSON_SCHEMA_V1, EditorConfig, EditorConfigJsonContractV1};
pub use editor_snapshot::{EDITOR_SNAPSHOT_JSON_SCHEMA_V1, EditorSnapshot};
pub use validation::validate_period_configs;

/// Interaction engine for editing a fasting/eating period timeline.
///
/// The editor holds a copy of the owner's period array plus chart geometry,
/// runs the hover/drag/dialog state machine and reports proposed mutations to
/// registered listeners. It never mutates the owner's data.
pub struct PeriodEditor {
    periods: Vec<PeriodConfig>,
    chart_dimensions: ChartDimensions,
    bounds: PeriodBounds,
    state: InteractionState,
    listeners: Vec<Box<dyn PeriodEditorListener>>,
}

impl PeriodEditor {
    pub fn new(config: EditorConfig) -> TimelineResult<Self> {
        let config = config.validate()?;
        debug!(
            grid_width = config.chart_dimensions.grid_width,
            min_periods = config.bounds.min_periods,
            "period editor created"
        );
        Ok(Self {
            periods: Vec::new(),
            chart_dimensions: config.chart_dimensions,
            bounds: config.bounds,
            state: InteractionState::Idle,
            listeners: Vec::new(),
        })
    }

    /// Feeds one input event through the state machine.
    pub fn send(&mut self, event: EditorEvent) {
        trace!(event = event.name(), mode = ?self.state.mode(), "editor event");
        match event {
            EditorEvent::HoverPeriod { period_index } => self.hover_period(period_index),
            EditorEvent::HoverGap { after_period_index } => self.hover_gap(after_period_index),
            EditorEvent::HoverExit => self.hover_exit(),
            EditorEvent::DragStart {
                period_index,
                edge,
                bar,
                pointer_x,
            } => self.drag_start(period_index, bar, edge, pointer_x),
            EditorEvent::DragMove { pointer_x } => self.drag_move(pointer_x),
            EditorEvent::DragEnd => self.drag_end(),
            EditorEvent::ClickPeriod { period_index } => self.click_period(period_index),
            EditorEvent::ClickGap { after_period_index } => self.click_gap(after_period_index),
            EditorEvent::DialogSave(draft) => self.dialog_save(draft),
            EditorEvent::DialogDelete => self.dialog_delete(),
            EditorEvent::DialogCancel => self.dialog_cancel(),
            EditorEvent::UpdatePeriodConfigs(periods) => self.update_period_configs(periods),
            EditorEvent::UpdateChartDimensions(dimensions) => {
                self.update_chart_dimensions(dimensions)
            }
        }
    }

    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    #[must_use]
    pub fn periods(&self) -> &[PeriodConfig] {
        &self.periods
    }

    #[must_use]
    pub fn chart_dimensions(&self) -> ChartDimensions {
        self.chart_dimensions
    }

    #[must_use]
    pub fn bounds(&self) -> PeriodBounds {
        self.bounds
    }
}
