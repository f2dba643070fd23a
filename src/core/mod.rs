pub mod bounds;
pub mod drag_solver;
pub mod gaps;
pub mod period;
pub mod period_index;
pub mod pixel_time;
pub mod primitives;
pub mod types;

pub use bounds::{
    MAX_EATING_WINDOW_HOURS, MAX_FASTING_DURATION_HOURS, MIN_EATING_WINDOW_HOURS,
    MIN_FASTING_DURATION_HOURS, MIN_PERIODS, PeriodBounds,
};
pub use drag_solver::{
    BarType, DragEdge, DragHandle, DragState, DragUpdates, NeighborSnapshot, compute_updates,
};
pub use gaps::{PeriodGap, compute_gaps, find_gap_after};
pub use period::{PeriodChanges, PeriodConfig, PeriodUpdate, apply_period_updates};
pub use period_index::{
    count_non_deleted, find_next_non_deleted, find_previous_non_deleted, live_period,
    non_deleted_indices,
};
pub use pixel_time::{DRAG_SNAP_HOURS, HOURS_PER_GRID, hours_to_pixels, pixels_to_hours, snap_hours};
pub use types::ChartDimensions;
