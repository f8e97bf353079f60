//! Eigenschaftstests der Kurven-Engine über die öffentliche API.

use approx::assert_relative_eq;
use glam::Vec2;
use running_train_engine::{ArcLengthTable, ClosedSpline, ControlPoints, MotionMode, Track};

fn reference_points() -> Vec<Vec2> {
    vec![
        Vec2::new(150.0, 330.0),
        Vec2::new(150.0, 450.0),
        Vec2::new(450.0, 450.0),
        Vec2::new(450.0, 150.0),
    ]
}

/// Drei dicht gedrängte Punkte auf der Oberkante, dann weite Abstände.
fn uneven_points() -> Vec<Vec2> {
    vec![
        Vec2::new(100.0, 100.0),
        Vec2::new(150.0, 100.0),
        Vec2::new(200.0, 100.0),
        Vec2::new(500.0, 100.0),
        Vec2::new(500.0, 400.0),
        Vec2::new(100.0, 400.0),
    ]
}

fn point_sets() -> Vec<Vec<Vec2>> {
    vec![
        reference_points(),
        uneven_points(),
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, -20.0),
            Vec2::new(80.0, 40.0),
        ],
        (0..12)
            .map(|i| {
                let a = i as f32 / 12.0 * std::f32::consts::TAU;
                Vec2::new(300.0 + 200.0 * a.cos(), 300.0 + 120.0 * a.sin())
            })
            .collect(),
    ]
}

// ── Kontinuität & Geschlossenheit ───────────────────────────────────

#[test]
fn test_segments_meet_at_every_boundary() {
    for points in point_sets() {
        let spline = ClosedSpline::new(&ControlPoints::new(points).unwrap());
        let n = spline.segment_count();
        for i in 0..n {
            let a = spline.position(i, 1.0);
            let b = spline.position((i + 1) % n, 0.0);
            assert!(a.distance(b) < 1e-3, "Sprung an Segmentgrenze {i}: {a:?} vs {b:?}");
        }
    }
}

#[test]
fn test_trace_returns_to_start() {
    for points in point_sets() {
        let spline = ClosedSpline::new(&ControlPoints::new(points).unwrap());
        let n = spline.segment_count();
        let start = spline.position(0, 0.0);
        let mut last = start;
        for i in 0..n {
            for k in 1..=20 {
                let p = spline.position(i, k as f32 / 20.0);
                assert!(p.is_finite());
                last = p;
            }
        }
        assert!(last.distance(start) < 1e-3, "Kurve schließt nicht: {last:?} vs {start:?}");
    }
}

// ── Arc-Length-Tabelle ──────────────────────────────────────────────

#[test]
fn test_table_monotonic_for_all_sets() {
    for points in point_sets() {
        let spline = ClosedSpline::new(&ControlPoints::new(points).unwrap());
        let table = ArcLengthTable::build(&spline, 250).unwrap();
        assert!(
            table
                .samples()
                .windows(2)
                .all(|w| w[1].distance >= w[0].distance && w[1].param > w[0].param)
        );
    }
}

#[test]
fn test_param_at_distance_boundaries() {
    let track = Track::new(reference_points()).unwrap();
    let table = track.arc_table().unwrap();
    assert_eq!(table.param_at_distance(0.0), 0.0);
    assert_eq!(table.param_at_distance(table.perimeter()), 0.0);
}

// ── Arc-Length vs. naive Bewegung ───────────────────────────────────

fn car_gaps(track: &Track, mode: MotionMode) -> Vec<f32> {
    let n = track.point_count() as f32;
    let mut gaps = Vec::new();
    let mut progress = 0.0;
    while progress < n {
        let cars = track.evaluate(progress, mode, 6, 20.0).unwrap();
        gaps.extend(cars.windows(2).map(|w| w[0].position.distance(w[1].position)));
        progress += 0.25;
    }
    gaps
}

fn spread(values: &[f32]) -> f32 {
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(0.0, f32::max);
    max / min
}

#[test]
fn test_arc_length_spacing_uniform_naive_not() {
    let track = Track::with_resolution(uneven_points(), 500).unwrap();

    let arc_gaps = car_gaps(&track, MotionMode::ArcLength);
    let naive_gaps = car_gaps(&track, MotionMode::Naive);

    // Sehnenlänge ≤ Bogenlänge 3h = 60, in Kurven etwas kürzer
    assert!(arc_gaps.iter().all(|&g| g <= 60.1 && g > 30.0), "{arc_gaps:?}");
    assert!(spread(&arc_gaps) < 2.0, "Arc-Length-Abstände schwanken: {}", spread(&arc_gaps));
    assert!(spread(&naive_gaps) > 3.0, "Naive Abstände zu gleichmäßig: {}", spread(&naive_gaps));
}

#[test]
fn test_arc_length_spacing_exact_along_curve() {
    let track = Track::with_resolution(uneven_points(), 1000).unwrap();
    let table = track.arc_table().unwrap();
    let cars = track.evaluate(1.3, MotionMode::ArcLength, 5, 20.0).unwrap();
    for w in cars.windows(2) {
        let along = (table.distance_at_param(w[0].param) - table.distance_at_param(w[1].param))
            .rem_euclid(table.perimeter());
        assert_relative_eq!(along, 60.0, epsilon = 0.1);
    }
}

// ── Konkretes Szenario & Rebuild-Idempotenz ─────────────────────────

#[test]
fn test_reference_scenario() {
    let spline = ClosedSpline::new(&ControlPoints::new(reference_points()).unwrap());
    assert_eq!(spline.tangents()[0], Vec2::new(-150.0, 150.0));
    assert_eq!(spline.position(0, 0.0), Vec2::new(150.0, 330.0));
    assert_eq!(spline.position(0, 1.0), Vec2::new(150.0, 450.0));
}

#[test]
fn test_remove_and_readd_reproduces_curve() {
    let original = Track::new(reference_points()).unwrap();
    let mut edited = original.clone();

    let removed = edited.remove_point(2).unwrap();
    assert_eq!(edited.point_count(), 3);
    edited.insert_point(2, removed).unwrap();

    let a = original.spline().unwrap();
    let b = edited.spline().unwrap();
    assert_eq!(a.tangents(), b.tangents());
    for k in 0..40 {
        let t = k as f32 * 0.1;
        assert_eq!(a.position_at(t), b.position_at(t));
    }
    assert_eq!(
        original.total_perimeter().unwrap(),
        edited.total_perimeter().unwrap()
    );
}

#[test]
fn test_progress_outside_range_wraps() {
    let track = Track::new(reference_points()).unwrap();
    let inside = track.evaluate(1.0, MotionMode::Naive, 1, 20.0).unwrap();
    let outside = track.evaluate(5.0, MotionMode::Naive, 1, 20.0).unwrap();
    assert_relative_eq!(inside[0].position.x, outside[0].position.x, epsilon = 1e-3);
    assert_relative_eq!(inside[0].position.y, outside[0].position.y, epsilon = 1e-3);
}
