//! Renderer seam consumed by the draw session.
//!
//! Implementations own color state and the drawing surface lifecycle. The draw session
//! calls into the contract in a fixed sequence: background and title once, one untraced
//! move to the first point, then a traced line to every point with interleaved color
//! changes, and finally a cursor hide. Methods are infallible; a failing surface
//! terminates the run.

use crate::core::math::Vector2;

/// Pen color: either a name understood by the rendering backend or RGB with unit
/// interval components.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PenColor {
    Named(String),
    Rgb(f64, f64, f64),
}

impl PenColor {
    pub fn named(name: impl Into<String>) -> Self {
        PenColor::Named(name.into())
    }
}

/// Drawing surface contract.
pub trait Renderer {
    /// Fill the drawing surface background.
    fn set_background(&mut self, color: &PenColor);

    /// Name the drawing surface window or document.
    fn set_title(&mut self, title: &str);

    /// Set the pen color for subsequent line segments.
    fn set_color(&mut self, color: &PenColor);

    /// Move the pen without leaving a trace.
    fn move_to(&mut self, point: Vector2<f64>);

    /// Draw a line segment from the current pen position to `point`.
    fn line_to(&mut self, point: Vector2<f64>);

    /// Hide the drawing cursor once the stroke is complete.
    fn hide_cursor(&mut self);

    /// Clear the drawing surface.
    fn reset(&mut self);
}
