use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};
use period_timeline::api::{EditorConfig, PeriodEditor};
use period_timeline::core::{
    BarType, ChartDimensions, DragEdge, DragHandle, DragState, PeriodBounds, PeriodConfig,
    apply_period_updates, compute_updates, pixels_to_hours,
};
use period_timeline::extensions::{EditorContext, EditorNotification, PeriodEditorListener};
use period_timeline::interaction::EditorEvent;
use proptest::prelude::*;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 18, 0, 0).unwrap()
}

fn half_hours(steps: i32) -> f64 {
    f64::from(steps) * 0.5
}

fn contiguous(durations: &[(f64, f64)]) -> Vec<PeriodConfig> {
    let mut start = t0();
    durations
        .iter()
        .map(|&(fasting, eating)| {
            let period = PeriodConfig::new(start, fasting, eating);
            start = period.end_time();
            period
        })
        .collect()
}

fn edge_strategy() -> impl Strategy<Value = (BarType, DragEdge)> {
    prop_oneof![
        Just((BarType::Fasting, DragEdge::Left)),
        Just((BarType::Fasting, DragEdge::Right)),
        Just((BarType::Eating, DragEdge::Left)),
        Just((BarType::Eating, DragEdge::Right)),
    ]
}

/// Durations in half-hour steps inside the default bounds.
fn durations_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((2i32..=336, 2i32..=48), 3)
        .prop_map(|raw| {
            raw.into_iter()
                .map(|(fasting, eating)| (half_hours(fasting), half_hours(eating)))
                .collect()
        })
}

/// Whether every duration the handle touches stays in bounds for the middle period.
fn touched_in_bounds(
    configs: &[PeriodConfig],
    handle: DragHandle,
    delta: f64,
    bounds: PeriodBounds,
) -> bool {
    let (previous, period, next) = (configs[0], configs[1], configs[2]);
    match handle {
        DragHandle::PeriodStart => {
            bounds.fasting_in_bounds(period.fasting_duration - delta)
                && bounds.eating_in_bounds(previous.eating_window + delta)
        }
        DragHandle::FastingEatingBoundary => {
            bounds.fasting_in_bounds(period.fasting_duration + delta)
                && bounds.eating_in_bounds(period.eating_window - delta)
        }
        DragHandle::PeriodEnd => {
            bounds.eating_in_bounds(period.eating_window + delta)
                && bounds.fasting_in_bounds(next.fasting_duration - delta)
        }
    }
}

struct CountingListener {
    count: Rc<RefCell<usize>>,
}

impl PeriodEditorListener for CountingListener {
    fn id(&self) -> &str {
        "counter"
    }

    fn on_notification(&mut self, _notification: &EditorNotification, _context: EditorContext) {
        *self.count.borrow_mut() += 1;
    }
}

proptest! {
    #[test]
    fn pixels_to_hours_is_always_half_hour_multiple(
        pixel_delta in -100_000.0f64..100_000.0,
        grid_width in 0.5f64..10_000.0
    ) {
        let hours = pixels_to_hours(pixel_delta, grid_width);
        prop_assert_eq!((hours * 2.0).round(), hours * 2.0);
        prop_assert_eq!(pixels_to_hours(pixel_delta, 0.0), 0.0);
    }

    #[test]
    fn accepted_updates_preserve_bounds_and_shared_boundaries(
        durations in durations_strategy(),
        (bar, edge) in edge_strategy(),
        delta_steps in -400i32..=400
    ) {
        let bounds = PeriodBounds::default();
        let delta = half_hours(delta_steps);
        let mut configs = contiguous(&durations);
        let drag = DragState::capture(&configs, 1, bar, edge, 0.0).expect("live period");

        let expected_valid = touched_in_bounds(&configs, drag.handle(), delta, bounds);
        let result = compute_updates(&drag, delta, bounds);
        prop_assert_eq!(result.is_some(), expected_valid);

        if let Some(updates) = result {
            apply_period_updates(&mut configs, &updates);
            for period in &configs {
                prop_assert!(bounds.fasting_in_bounds(period.fasting_duration));
                prop_assert!(bounds.eating_in_bounds(period.eating_window));
            }
            prop_assert_eq!(configs[0].end_time(), configs[1].start_time);
            prop_assert_eq!(configs[1].end_time(), configs[2].start_time);
        }
    }

    #[test]
    fn zero_delta_never_changes_anything(
        durations in durations_strategy(),
        (bar, edge) in edge_strategy()
    ) {
        let mut configs = contiguous(&durations);
        let before = configs.clone();
        let drag = DragState::capture(&configs, 1, bar, edge, 0.0).expect("live period");

        let updates = compute_updates(&drag, 0.0, PeriodBounds::default()).expect("identity");
        apply_period_updates(&mut configs, &updates);
        prop_assert_eq!(configs, before);
    }

    #[test]
    fn rejected_drag_moves_leave_editor_untouched(
        durations in durations_strategy(),
        (bar, edge) in edge_strategy(),
        pointer_x in -20_000.0f64..20_000.0
    ) {
        let configs = contiguous(&durations);
        let dimensions = ChartDimensions::from_chart_width(560.0, 80.0);
        let mut editor = PeriodEditor::new(EditorConfig::new(dimensions)).expect("editor init");
        editor.send(EditorEvent::UpdatePeriodConfigs(configs.clone()));

        let count = Rc::new(RefCell::new(0usize));
        editor
            .register_listener(Box::new(CountingListener { count: count.clone() }))
            .expect("register listener");

        editor.send(EditorEvent::DragStart { period_index: 1, edge, bar, pointer_x: 0.0 });
        let before = editor.snapshot();
        editor.send(EditorEvent::DragMove { pointer_x });

        let delta = pixels_to_hours(pointer_x, dimensions.grid_width);
        let handle = DragHandle::resolve(bar, edge);
        if touched_in_bounds(&configs, handle, delta, PeriodBounds::default()) {
            prop_assert_eq!(*count.borrow(), 1);
        } else {
            prop_assert_eq!(*count.borrow(), 0);
            prop_assert_eq!(editor.snapshot(), before);
        }
    }
}
