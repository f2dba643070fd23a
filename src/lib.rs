//! period-timeline: constraint-propagation engine for fasting/eating timelines.
//!
//! The crate turns discrete pointer and dialog events into declarative patches
//! over an ordered list of periods. Drags snap to half hours, ripple into the
//! neighbor that shares the dragged boundary, and are rejected as a whole when
//! any touched duration would leave its bounds.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{EditorConfig, PeriodEditor};
pub use error::{TimelineError, TimelineResult};
