mod test_utils;

use std::time::Duration;

use spirograph::core::math::vec2;
use spirograph::curve::{CurveSpec, CurveTrace, DerivedCounts};
use spirograph::draw::{
    clear_after, draw_curve, effective_clear_delay, generate_and_draw, DrawError, DrawOptions,
};
use spirograph::render::PenColor;
use test_utils::{
    RecordingRenderer, RecordingTransport, RenderOp, SequenceRandom, TransportEvent,
};

fn options(pen_color: &str, random_colors: bool) -> DrawOptions {
    DrawOptions {
        pen_color: PenColor::named(pen_color),
        random_colors,
        finish_delay: Duration::ZERO,
    }
}

#[test]
fn call_sequence_and_cadence() {
    let spec = CurveSpec::new(200.0, 50.0, 70.0, 0.01);
    let points: Vec<_> = (0..8).map(|i| vec2(i as f64, -(i as f64))).collect();
    let trace = CurveTrace::from_points(points.clone());
    let counts = DerivedCounts {
        num_periods: 1,
        num_petals: 1,
        points_per_period: 2,
    };

    let mut renderer = RecordingRenderer::default();
    let mut transport = RecordingTransport::default();
    let mut random = SequenceRandom::new(vec![0.25, 0.5, 0.75]);

    draw_curve(
        &spec,
        &trace,
        &counts,
        &options("red", true),
        &mut renderer,
        &mut transport,
        &mut random,
    )
    .unwrap();

    // petals = 1: x samples at counts 2,4,6,8 and y samples at 4,8;
    // points per period = 2: one random color change at count 8
    let mut expected_ops = vec![
        RenderOp::Background(PenColor::named("black")),
        RenderOp::Title("Spirograph with R= 200, r = 50, and d = 70".to_string()),
        RenderOp::MoveTo(points[0]),
        RenderOp::Color(PenColor::named("red")),
    ];
    expected_ops.extend(points.iter().map(|&p| RenderOp::LineTo(p)));
    expected_ops.push(RenderOp::Color(PenColor::Rgb(0.25, 0.5, 0.75)));
    expected_ops.push(RenderOp::HideCursor);
    assert_eq!(renderer.ops, expected_ops);

    let expected_events = vec![
        TransportEvent::X(points[1].x),
        TransportEvent::X(points[3].x),
        TransportEvent::Y(points[3].y),
        TransportEvent::X(points[5].x),
        TransportEvent::X(points[7].x),
        TransportEvent::Y(points[7].y),
        TransportEvent::Finished,
    ];
    assert_eq!(transport.events, expected_events);
}

#[test]
fn finished_is_always_the_final_message() {
    let spec = CurveSpec::new(200.0, 50.0, 0.0, 0.01);
    let trace = CurveTrace::from_points(vec![vec2(150.0, 0.0); 20]);
    let counts = DerivedCounts {
        num_periods: 1,
        num_petals: 4,
        points_per_period: 629,
    };

    let mut renderer = RecordingRenderer::default();
    let mut transport = RecordingTransport::default();
    let mut random = SequenceRandom::new(vec![]);

    draw_curve(
        &spec,
        &trace,
        &counts,
        &options("blue", false),
        &mut renderer,
        &mut transport,
        &mut random,
    )
    .unwrap();

    assert_eq!(transport.events.last(), Some(&TransportEvent::Finished));
    let finished_count = transport
        .events
        .iter()
        .filter(|e| **e == TransportEvent::Finished)
        .count();
    assert_eq!(finished_count, 1);
}

#[test]
fn empty_trace_still_signals_finished() {
    let spec = CurveSpec::new(200.0, 50.0, 0.0, 0.01);
    let trace = CurveTrace::default();
    let counts = DerivedCounts {
        num_periods: 1,
        num_petals: 4,
        points_per_period: 629,
    };

    let mut renderer = RecordingRenderer::default();
    let mut transport = RecordingTransport::default();
    let mut random = SequenceRandom::new(vec![]);

    draw_curve(
        &spec,
        &trace,
        &counts,
        &options("black", false),
        &mut renderer,
        &mut transport,
        &mut random,
    )
    .unwrap();

    assert_eq!(transport.events, vec![TransportEvent::Finished]);
    assert!(!renderer
        .ops
        .iter()
        .any(|op| matches!(op, RenderOp::LineTo(_) | RenderOp::MoveTo(_))));
}

#[test]
fn random_source_is_untouched_without_random_mode() {
    let spec = CurveSpec::new(200.0, 50.0, 0.0, 0.01);
    let trace = CurveTrace::from_points((0..16).map(|i| vec2(i as f64, 0.0)).collect());
    let counts = DerivedCounts {
        num_periods: 1,
        num_petals: 1,
        points_per_period: 2,
    };

    let mut renderer = RecordingRenderer::default();
    let mut transport = RecordingTransport::default();
    // an empty sequence panics when drawn from, proving the source is never consulted
    let mut random = SequenceRandom::new(vec![]);

    draw_curve(
        &spec,
        &trace,
        &counts,
        &options("green", false),
        &mut renderer,
        &mut transport,
        &mut random,
    )
    .unwrap();

    assert!(!renderer
        .ops
        .iter()
        .any(|op| matches!(op, RenderOp::Color(PenColor::Rgb(..)))));
}

#[test]
fn invalid_spec_produces_no_side_effects() {
    let spec = CurveSpec::new(0.0, 50.0, 70.0, 0.01);

    let mut renderer = RecordingRenderer::default();
    let mut transport = RecordingTransport::default();
    let mut random = SequenceRandom::new(vec![]);

    let result = generate_and_draw(
        spec,
        &options("red", false),
        &mut renderer,
        &mut transport,
        &mut random,
    );

    assert!(matches!(result, Err(DrawError::Curve(_))));
    assert!(renderer.ops.is_empty());
    assert!(transport.events.is_empty());
}

#[test]
fn clear_delay_cap_resets_to_default() {
    assert_eq!(effective_clear_delay(0), 0);
    assert_eq!(effective_clear_delay(5), 5);
    assert_eq!(effective_clear_delay(120), 120);
    assert_eq!(effective_clear_delay(121), 10);
    assert_eq!(effective_clear_delay(u64::MAX), 10);
}

#[test]
fn clear_after_resets_the_renderer() {
    let mut renderer = RecordingRenderer::default();
    clear_after(&mut renderer, 0);
    assert_eq!(renderer.ops, vec![RenderOp::Reset]);
}
