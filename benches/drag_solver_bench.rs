use chrono::{Duration, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use period_timeline::api::{EditorConfig, PeriodEditor};
use period_timeline::core::{
    BarType, ChartDimensions, DragEdge, DragState, PeriodBounds, PeriodConfig, compute_gaps,
    compute_updates, pixels_to_hours,
};
use period_timeline::interaction::EditorEvent;
use std::hint::black_box;

fn timeline(len: usize) -> Vec<PeriodConfig> {
    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 20, 0, 0)
        .single()
        .expect("valid start");
    (0..len)
        .map(|i| {
            let offset = Duration::hours(24 * i as i64 + if i % 3 == 0 { 2 } else { 0 });
            PeriodConfig::new(start + offset, 16.0, 6.0).with_deleted(i % 7 == 6)
        })
        .collect()
}

fn bench_pixels_to_hours(c: &mut Criterion) {
    c.bench_function("pixels_to_hours", |b| {
        b.iter(|| pixels_to_hours(black_box(123.4), black_box(480.0)))
    });
}

fn bench_compute_updates(c: &mut Criterion) {
    let configs = timeline(3);
    let drag = DragState::capture(&configs, 1, BarType::Eating, DragEdge::Right, 0.0)
        .expect("live period");
    let bounds = PeriodBounds::default();

    c.bench_function("compute_updates_period_end", |b| {
        b.iter(|| compute_updates(black_box(&drag), black_box(1.5), bounds))
    });
}

fn bench_drag_session(c: &mut Criterion) {
    let config = EditorConfig::new(ChartDimensions::from_chart_width(560.0, 80.0));
    let mut editor = PeriodEditor::new(config).expect("editor init");
    editor.send(EditorEvent::UpdatePeriodConfigs(timeline(1_000)));

    c.bench_function("drag_session_100_moves", |b| {
        b.iter(|| {
            editor.send(EditorEvent::DragStart {
                period_index: 500,
                edge: DragEdge::Left,
                bar: BarType::Fasting,
                pointer_x: 0.0,
            });
            for step in 0..100 {
                editor.send(EditorEvent::DragMove {
                    pointer_x: black_box(f64::from(step) - 50.0),
                });
            }
            editor.send(EditorEvent::DragEnd);
        })
    });
}

fn bench_compute_gaps_1k(c: &mut Criterion) {
    let configs = timeline(1_000);
    c.bench_function("compute_gaps_1k", |b| {
        b.iter(|| compute_gaps(black_box(&configs)))
    });
}

criterion_group!(
    benches,
    bench_pixels_to_hours,
    bench_compute_updates,
    bench_drag_session,
    bench_compute_gaps_1k
);
criterion_main!(benches);
