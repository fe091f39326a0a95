//! Draw session orchestration: walks a generated trace in stroke order, draws each
//! segment, applies the emission cadence, and signals completion.
//!
//! This is the only side-effecting layer. Generation stays pure ([crate::curve]); the
//! renderer, transport, and random source are passed in explicitly per draw call, so no
//! process-wide drawing state exists. Everything runs sequentially on the calling
//! thread; the only time-based behavior is a fixed sleep before the finished signal and
//! before clearing the surface.

use std::thread;
use std::time::Duration;

use log::info;

use crate::curve::{generate, CurveError, CurveSpec, CurveTrace, DerivedCounts};
use crate::emission::EmissionPolicy;
use crate::random::RandomSource;
use crate::render::{PenColor, Renderer};
use crate::transport::{CoordTransport, TransportError};

/// Clear delay used when the requested delay exceeds [MAX_CLEAR_DELAY_SECS].
pub const DEFAULT_CLEAR_DELAY_SECS: u64 = 10;

/// Upper bound on the clear delay.
pub const MAX_CLEAR_DELAY_SECS: u64 = 120;

/// Error produced by a draw session.
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Options controlling a single draw session.
#[derive(Debug, Clone)]
pub struct DrawOptions {
    /// Pen color used for the stroke (until a random color change, if enabled).
    pub pen_color: PenColor,
    /// Assign a new random pen color every four periods worth of points.
    pub random_colors: bool,
    /// Sleep before the finished signal is sent.
    pub finish_delay: Duration,
}

impl Default for DrawOptions {
    fn default() -> Self {
        DrawOptions {
            pen_color: PenColor::named("black"),
            random_colors: false,
            finish_delay: Duration::from_secs(2),
        }
    }
}

/// Draw the generated `trace` on `renderer` while forwarding cadence-selected samples to
/// `transport`.
///
/// The fixed call sequence is: background and title once, an untraced move to the first
/// point, pen color, then a traced line to every point in stroke order (the first point
/// is re-drawn as a zero length segment). After each segment the
/// [EmissionPolicy](crate::emission::EmissionPolicy) decides whether the point's x and/or
/// y value is forwarded and whether a new random color is assigned (three draws from
/// `random`: red, green, blue). Once all points are forwarded the cursor is hidden, the
/// session sleeps `options.finish_delay`, and the transport receives the terminal
/// finished signal, always the final message of the session.
///
/// Transport errors propagate immediately and abort the session; there is no retry and
/// no partial-result recovery.
pub fn draw_curve<R, X, S>(
    spec: &CurveSpec<f64>,
    trace: &CurveTrace<f64>,
    counts: &DerivedCounts,
    options: &DrawOptions,
    renderer: &mut R,
    transport: &mut X,
    random: &mut S,
) -> Result<(), DrawError>
where
    R: Renderer,
    X: CoordTransport,
    S: RandomSource,
{
    renderer.set_background(&PenColor::named("black"));
    renderer.set_title(&format!(
        "Spirograph with R= {}, r = {}, and d = {}",
        spec.outer_radius, spec.inner_radius, spec.pen_offset
    ));

    if let Some(first) = trace.get(0) {
        renderer.move_to(first);
    }
    renderer.set_color(&options.pen_color);

    let policy = EmissionPolicy::new(counts, options.random_colors);
    for (index, point) in trace.iter_points().enumerate() {
        renderer.line_to(*point);

        let events = policy.events_at(index as u64 + 1);
        if events.x_sample {
            transport.send_x(point.x)?;
        }
        if events.y_sample {
            transport.send_y(point.y)?;
        }
        if events.color_change {
            let red = random.next_unit_interval();
            let green = random.next_unit_interval();
            let blue = random.next_unit_interval();
            renderer.set_color(&PenColor::Rgb(red, green, blue));
        }
    }

    renderer.hide_cursor();
    info!("done drawing this curve");

    thread::sleep(options.finish_delay);
    transport.send_finished()?;

    Ok(())
}

/// Generate the curve for `spec` and draw it in one call.
///
/// Validation failures surface before any rendering or transport side effect: an invalid
/// spec produces no partial trace, no drawn segments, and no messages.
pub fn generate_and_draw<R, X, S>(
    spec: CurveSpec<f64>,
    options: &DrawOptions,
    renderer: &mut R,
    transport: &mut X,
    random: &mut S,
) -> Result<(CurveTrace<f64>, DerivedCounts), DrawError>
where
    R: Renderer,
    X: CoordTransport,
    S: RandomSource,
{
    let (trace, counts) = generate(spec)?;
    draw_curve(&spec, &trace, &counts, options, renderer, transport, random)?;
    Ok((trace, counts))
}

/// Clamp a requested clear delay: values above [MAX_CLEAR_DELAY_SECS] reset to
/// [DEFAULT_CLEAR_DELAY_SECS].
///
/// # Examples
///
/// ```
/// # use spirograph::draw::*;
/// assert_eq!(effective_clear_delay(5), 5);
/// assert_eq!(effective_clear_delay(120), 120);
/// assert_eq!(effective_clear_delay(121), 10);
/// ```
pub fn effective_clear_delay(secs: u64) -> u64 {
    if secs > MAX_CLEAR_DELAY_SECS {
        DEFAULT_CLEAR_DELAY_SECS
    } else {
        secs
    }
}

/// Clear the drawing surface after `secs` seconds (clamped by
/// [effective_clear_delay]).
pub fn clear_after<R>(renderer: &mut R, secs: u64)
where
    R: Renderer,
{
    thread::sleep(Duration::from_secs(effective_clear_delay(secs)));
    renderer.reset();
}
