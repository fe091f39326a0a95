use log::{debug, info};

use super::{CurveError, CurveSpec, CurveTrace};
use crate::core::math::{euclidean_gcd, vec2, AngleSequence};
use crate::core::traits::Real;

/// Counts derived from the reduced ratio of the two radii and the angle step.
///
/// `num_periods` and `num_petals` are the reduced numerator and denominator of `r / R`,
/// `points_per_period` the sample count of one full `2π` sweep. Callers use these to
/// decide sampling and coloring cadence; they are recomputed on each generation call and
/// carry no persistent identity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedCounts {
    /// `r / gcd(r, R)`: full `2π` sweeps before the curve closes.
    pub num_periods: u64,
    /// `R / gcd(r, R)`: petal count of the closed curve.
    pub num_petals: u64,
    /// `ceil(2π / angle_step)`: samples per period.
    pub points_per_period: u64,
}

/// Deterministically map a [CurveSpec] to the ordered point trace of its spirograph curve
/// plus the [DerivedCounts] callers use to decide sampling/coloring/emission cadence.
///
/// For each angle `theta` in `[0, 2π·num_periods)` stepped by `angle_step`:
///
/// ```text
/// x = R·((1-k)·cos(theta) + l·k·cos(((1-k)/k)·theta))
/// y = R·((1-k)·sin(theta) + l·k·sin(((1-k)/k)·theta))
/// ```
///
/// with `k = r/R` and `l = d/r`. Points are appended in generation order (stroke order
/// for rendering, running count order for emission). Pure function apart from logging:
/// identical specs produce identical traces, and every point is finite for a valid spec.
///
/// # Errors
///
/// Returns [CurveError::InvalidSpec] when a radius is zero or negative or the angle step
/// is not positive. No partial trace is produced.
///
/// # Examples
///
/// ```
/// # use spirograph::curve::*;
/// let spec = CurveSpec::new(200.0, 50.0, 0.0, 0.01);
/// let (trace, counts) = generate(spec)?;
/// assert_eq!(counts.num_periods, 1);
/// assert_eq!(counts.num_petals, 4);
/// assert_eq!(counts.points_per_period, 629);
/// // with a zero pen offset the first point sits at (R·(1-k), 0)
/// assert_eq!(trace.at(0).x, 150.0);
/// assert_eq!(trace.at(0).y, 0.0);
/// # Ok::<(), CurveError>(())
/// ```
pub fn generate<T>(spec: CurveSpec<T>) -> Result<(CurveTrace<T>, DerivedCounts), CurveError>
where
    T: Real,
{
    spec.validate()?;

    let gcd = euclidean_gcd(spec.inner_radius, spec.outer_radius);
    let periods = spec.inner_radius / gcd;
    let petals = spec.outer_radius / gcd;
    let counts = DerivedCounts {
        num_periods: count_from(periods, "period count")?,
        num_petals: count_from(petals, "petal count")?,
        points_per_period: count_from((T::tau() / spec.angle_step).ceil(), "points per period")?,
    };
    info!(
        "periods: {}, petals: {}, points per period: {}",
        counts.num_periods, counts.num_petals, counts.points_per_period
    );

    let k = spec.inner_radius / spec.outer_radius;
    let l = spec.pen_offset / spec.inner_radius;
    debug!("k = {:?}, l = {:?}", k, l);

    let one_minus_k = T::one() - k;
    let pen_term = l * k;
    let inner_freq = one_minus_k / k;

    let end = T::tau() * periods;
    let mut points =
        Vec::with_capacity((end / spec.angle_step).ceil().to_usize().unwrap_or(0));
    for theta in AngleSequence::new(end, spec.angle_step) {
        let x = spec.outer_radius
            * (one_minus_k * theta.cos() + pen_term * (inner_freq * theta).cos());
        let y = spec.outer_radius
            * (one_minus_k * theta.sin() + pen_term * (inner_freq * theta).sin());
        points.push(vec2(x, y));
    }
    info!("generated {} data points", points.len());

    Ok((CurveTrace::from_points(points), counts))
}

fn count_from<T>(value: T, what: &str) -> Result<u64, CurveError>
where
    T: Real,
{
    value
        .round()
        .to_u64()
        .ok_or_else(|| CurveError::invalid_spec(format!("{what} is not representable")))
}
