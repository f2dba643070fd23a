use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid chart dimensions: chart_width={chart_width}, day_label_width={day_label_width}")]
    InvalidDimensions {
        chart_width: f64,
        day_label_width: f64,
    },

    #[error("invalid period bounds: {0}")]
    InvalidBounds(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
