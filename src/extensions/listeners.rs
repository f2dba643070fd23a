use serde::{Deserialize, Serialize};

use crate::core::{PeriodChanges, PeriodConfig, PeriodUpdate};
use crate::interaction::InteractionMode;

/// Read-only editor snapshot passed alongside every notification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditorContext {
    pub interaction_mode: InteractionMode,
    pub hovered_period_index: Option<usize>,
    pub periods_len: usize,
    pub non_deleted_len: usize,
    pub grid_width: f64,
}

/// Proposed mutations emitted to the owner of the period array.
///
/// The editor never applies these itself; the owner commits them and pushes
/// the resulting array back with `EditorEvent::UpdatePeriodConfigs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorNotification {
    PeriodsDragUpdated {
        updates: Vec<PeriodUpdate>,
    },
    PeriodUpdated {
        period_index: usize,
        changes: PeriodChanges,
    },
    PeriodDeleted {
        period_index: usize,
    },
    PeriodAdded {
        after_period_index: usize,
        new_period: PeriodConfig,
    },
}

impl EditorNotification {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::PeriodsDragUpdated { .. } => "periods_drag_updated",
            Self::PeriodUpdated { .. } => "period_updated",
            Self::PeriodDeleted { .. } => "period_deleted",
            Self::PeriodAdded { .. } => "period_added",
        }
    }
}

/// Fire-and-forget receiver of editor notifications.
pub trait PeriodEditorListener {
    fn id(&self) -> &str;
    fn on_notification(&mut self, notification: &EditorNotification, context: EditorContext);
}
