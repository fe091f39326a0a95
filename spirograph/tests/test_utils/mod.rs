#![allow(dead_code)]

use spirograph::core::math::Vector2;
use spirograph::random::RandomSource;
use spirograph::render::{PenColor, Renderer};
use spirograph::transport::{CoordTransport, TransportError};

/// Single recorded renderer call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOp {
    Background(PenColor),
    Title(String),
    Color(PenColor),
    MoveTo(Vector2<f64>),
    LineTo(Vector2<f64>),
    HideCursor,
    Reset,
}

/// Renderer recording every call in order.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub ops: Vec<RenderOp>,
}

impl Renderer for RecordingRenderer {
    fn set_background(&mut self, color: &PenColor) {
        self.ops.push(RenderOp::Background(color.clone()));
    }

    fn set_title(&mut self, title: &str) {
        self.ops.push(RenderOp::Title(title.to_string()));
    }

    fn set_color(&mut self, color: &PenColor) {
        self.ops.push(RenderOp::Color(color.clone()));
    }

    fn move_to(&mut self, point: Vector2<f64>) {
        self.ops.push(RenderOp::MoveTo(point));
    }

    fn line_to(&mut self, point: Vector2<f64>) {
        self.ops.push(RenderOp::LineTo(point));
    }

    fn hide_cursor(&mut self) {
        self.ops.push(RenderOp::HideCursor);
    }

    fn reset(&mut self) {
        self.ops.push(RenderOp::Reset);
    }
}

/// Single recorded transport send.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    X(f64),
    Y(f64),
    Finished,
}

/// Transport recording every send in order.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub events: Vec<TransportEvent>,
}

impl CoordTransport for RecordingTransport {
    fn send_x(&mut self, x: f64) -> Result<(), TransportError> {
        self.events.push(TransportEvent::X(x));
        Ok(())
    }

    fn send_y(&mut self, y: f64) -> Result<(), TransportError> {
        self.events.push(TransportEvent::Y(y));
        Ok(())
    }

    fn send_finished(&mut self) -> Result<(), TransportError> {
        self.events.push(TransportEvent::Finished);
        Ok(())
    }
}

/// Deterministic random source yielding a fixed sequence of values.
///
/// Panics when drawn from past the end of the sequence, so constructing it with an empty
/// sequence asserts the source is never consulted.
#[derive(Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        SequenceRandom { values, next: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit_interval(&mut self) -> f64 {
        let value = self.values[self.next];
        self.next += 1;
        value
    }
}
