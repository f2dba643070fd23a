use serde::{Deserialize, Serialize};

use crate::core::{ChartDimensions, PeriodBounds};
use crate::error::{TimelineError, TimelineResult};

pub const EDITOR_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Public editor bootstrap configuration.
///
/// This type is serializable so host applications can persist/load editor
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct EditorConfig {
    #[serde(default)]
    pub chart_dimensions: ChartDimensions,
    #[serde(default)]
    pub bounds: PeriodBounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditorConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: EditorConfig,
}

impl EditorConfig {
    #[must_use]
    pub fn new(chart_dimensions: ChartDimensions) -> Self {
        Self {
            chart_dimensions,
            bounds: PeriodBounds::default(),
        }
    }

    /// Sets duration bounds and the minimum period count.
    #[must_use]
    pub fn with_bounds(mut self, bounds: PeriodBounds) -> Self {
        self.bounds = bounds;
        self
    }

    #[must_use]
    pub fn with_chart_dimensions(mut self, chart_dimensions: ChartDimensions) -> Self {
        self.chart_dimensions = chart_dimensions;
        self
    }

    pub fn validate(self) -> TimelineResult<Self> {
        self.chart_dimensions.validate()?;
        self.bounds.validate()?;
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Serializes config wrapped in the versioned v1 contract.
    pub fn to_json_contract_v1_pretty(self) -> TimelineResult<String> {
        let payload = EditorConfigJsonContractV1 {
            schema_version: EDITOR_CONFIG_JSON_SCHEMA_V1,
            config: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Deserializes config from either the bare or the versioned JSON form.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        if let Ok(payload) = serde_json::from_str::<EditorConfigJsonContractV1>(input) {
            if payload.schema_version != EDITOR_CONFIG_JSON_SCHEMA_V1 {
                return Err(TimelineError::InvalidData(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            return payload.config.validate();
        }
        let config: Self = serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}
