use serde::{Deserialize, Serialize};

use crate::core::{ChartDimensions, PeriodBounds, PeriodConfig};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::InteractionState;

use super::PeriodEditor;

pub const EDITOR_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable copy of everything the editor holds, for host diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    pub schema_version: u32,
    pub state: InteractionState,
    pub periods: Vec<PeriodConfig>,
    pub chart_dimensions: ChartDimensions,
    pub bounds: PeriodBounds,
}

impl EditorSnapshot {
    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let snapshot: Self = serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse snapshot: {e}")))?;
        if snapshot.schema_version != EDITOR_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(TimelineError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                snapshot.schema_version
            )));
        }
        Ok(snapshot)
    }
}

impl PeriodEditor {
    #[must_use]
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            schema_version: EDITOR_SNAPSHOT_JSON_SCHEMA_V1,
            state: self.state,
            periods: self.periods.clone(),
            chart_dimensions: self.chart_dimensions,
            bounds: self.bounds,
        }
    }
}
