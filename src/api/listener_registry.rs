use tracing::trace;

use crate::core::count_non_deleted;
use crate::error::{TimelineError, TimelineResult};
use crate::extensions::{EditorContext, EditorNotification, PeriodEditorListener};

use super::PeriodEditor;

impl PeriodEditor {
    /// Registers a listener with unique identifier.
    pub fn register_listener(
        &mut self,
        listener: Box<dyn PeriodEditorListener>,
    ) -> TimelineResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(TimelineError::InvalidData(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.has_listener(&listener_id) {
            return Err(TimelineError::InvalidData(format!(
                "listener with id `{listener_id}` is already registered"
            )));
        }
        self.listeners.push(listener);
        Ok(())
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        match self
            .listeners
            .iter()
            .position(|entry| entry.id() == listener_id)
        {
            Some(position) => {
                self.listeners.remove(position);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listeners
            .iter()
            .any(|listener| listener.id() == listener_id)
    }

    #[must_use]
    pub fn context(&self) -> EditorContext {
        EditorContext {
            interaction_mode: self.state.mode(),
            hovered_period_index: self.state.hovered_period_index(),
            periods_len: self.periods.len(),
            non_deleted_len: count_non_deleted(&self.periods),
            grid_width: self.chart_dimensions.grid_width,
        }
    }

    pub(super) fn emit(&mut self, notification: EditorNotification) {
        let context = self.context();
        trace!(
            notification = notification.name(),
            listeners = self.listeners.len(),
            "emitting editor notification"
        );
        for listener in &mut self.listeners {
            listener.on_notification(&notification, context);
        }
    }
}
