use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

const PIXEL_EPSILON: f64 = 1e-6;

/// Pixel geometry of the timeline chart as measured by the rendering layer.
///
/// `grid_width` is the horizontal span that represents one day (24 hours);
/// it excludes the column reserved for day labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartDimensions {
    pub chart_width: f64,
    pub day_label_width: f64,
    pub grid_width: f64,
}

impl ChartDimensions {
    #[must_use]
    pub fn from_chart_width(chart_width: f64, day_label_width: f64) -> Self {
        Self {
            chart_width,
            day_label_width,
            grid_width: (chart_width - day_label_width).max(0.0),
        }
    }

    /// A chart that has not been measured yet, or has collapsed to zero width.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !self.grid_width.is_finite() || self.grid_width <= 0.0
    }

    /// Rejects non-finite or negative widths and a grid wider than the space
    /// left beside the day labels.
    pub fn validate(self) -> TimelineResult<Self> {
        if !self.chart_width.is_finite()
            || !self.day_label_width.is_finite()
            || !self.grid_width.is_finite()
            || self.chart_width < 0.0
            || self.day_label_width < 0.0
            || self.grid_width < 0.0
            || self.grid_width > self.chart_width - self.day_label_width + PIXEL_EPSILON
        {
            return Err(TimelineError::InvalidDimensions {
                chart_width: self.chart_width,
                day_label_width: self.day_label_width,
            });
        }
        Ok(self)
    }
}
