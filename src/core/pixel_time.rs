/// Hours represented by one full grid width (one day row).
pub const HOURS_PER_GRID: f64 = 24.0;

/// Drag granularity: pointer deltas snap to half-hour marks.
pub const DRAG_SNAP_HOURS: f64 = 0.5;

/// Converts a horizontal pixel delta into an hour delta snapped to `DRAG_SNAP_HOURS`.
///
/// Returns `0.0` for an unmeasured grid (`grid_width_px <= 0`) or non-finite input.
#[must_use]
pub fn pixels_to_hours(pixel_delta: f64, grid_width_px: f64) -> f64 {
    if !pixel_delta.is_finite() || !grid_width_px.is_finite() || grid_width_px <= 0.0 {
        return 0.0;
    }
    let hours_per_pixel = HOURS_PER_GRID / grid_width_px;
    snap_hours(pixel_delta * hours_per_pixel)
}

/// Inverse mapping, unquantized. Used by hosts to position drag previews.
#[must_use]
pub fn hours_to_pixels(hours: f64, grid_width_px: f64) -> f64 {
    if !hours.is_finite() || !grid_width_px.is_finite() || grid_width_px <= 0.0 {
        return 0.0;
    }
    hours * (grid_width_px / HOURS_PER_GRID)
}

/// Rounds to the nearest multiple of `DRAG_SNAP_HOURS` (ties away from zero).
#[must_use]
pub fn snap_hours(hours: f64) -> f64 {
    if !hours.is_finite() {
        return 0.0;
    }
    let snapped = (hours / DRAG_SNAP_HOURS).round() * DRAG_SNAP_HOURS;
    // normalize -0.0
    if snapped == 0.0 { 0.0 } else { snapped }
}

#[cfg(test)]
mod tests {
    use super::{hours_to_pixels, pixels_to_hours, snap_hours};

    #[test]
    fn one_grid_width_is_one_day() {
        assert_eq!(pixels_to_hours(480.0, 480.0), 24.0);
        assert_eq!(pixels_to_hours(-240.0, 480.0), -12.0);
    }

    #[test]
    fn deltas_snap_to_half_hours() {
        // 480px grid -> 20px per hour
        assert_eq!(pixels_to_hours(14.0, 480.0), 0.5);
        assert_eq!(pixels_to_hours(16.0, 480.0), 1.0);
        assert_eq!(pixels_to_hours(4.0, 480.0), 0.0);
    }

    #[test]
    fn degenerate_grid_maps_to_zero() {
        assert_eq!(pixels_to_hours(120.0, 0.0), 0.0);
        assert_eq!(pixels_to_hours(120.0, -5.0), 0.0);
        assert_eq!(pixels_to_hours(f64::NAN, 480.0), 0.0);
        assert_eq!(hours_to_pixels(3.0, 0.0), 0.0);
    }

    #[test]
    fn snap_never_returns_negative_zero() {
        assert!(snap_hours(-0.1).is_sign_positive());
    }

    #[test]
    fn hours_to_pixels_is_linear() {
        assert_eq!(hours_to_pixels(6.0, 480.0), 120.0);
    }
}
