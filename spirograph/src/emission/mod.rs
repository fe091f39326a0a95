//! Emission cadence policy: pure divisibility rules deciding which generated points are
//! forwarded to the coordinate transport and when random pen colors rotate.
//!
//! The cadence depends only on counts known before emission starts, so the policy is a
//! stateless function from a point's 1-based running count to the set of events it
//! triggers. The terminal finished event is not part of the cadence; the draw session
//! issues it once after all points are forwarded.

use crate::curve::DerivedCounts;

/// Events triggered by a single point of the trace.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct EmissionEvents {
    /// Forward the point's x value to the transport.
    pub x_sample: bool,
    /// Forward the point's y value to the transport.
    pub y_sample: bool,
    /// Assign a new random pen color for subsequent rendering.
    pub color_change: bool,
}

/// Cadence policy derived from a curve's [DerivedCounts].
///
/// - x samples fire at running counts divisible by `2·num_petals`,
/// - y samples at counts divisible by `4·num_petals`,
/// - color changes (when random color mode is enabled) at counts divisible by
///   `4·points_per_period`.
///
/// # Examples
///
/// ```
/// # use spirograph::curve::DerivedCounts;
/// # use spirograph::emission::EmissionPolicy;
/// let counts = DerivedCounts {
///     num_periods: 1,
///     num_petals: 4,
///     points_per_period: 629,
/// };
/// let policy = EmissionPolicy::new(&counts, false);
/// assert!(policy.events_at(8).x_sample);
/// assert!(!policy.events_at(8).y_sample);
/// assert!(policy.events_at(16).x_sample);
/// assert!(policy.events_at(16).y_sample);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct EmissionPolicy {
    num_petals: u64,
    points_per_period: u64,
    random_colors: bool,
}

impl EmissionPolicy {
    pub fn new(counts: &DerivedCounts, random_colors: bool) -> Self {
        EmissionPolicy {
            num_petals: counts.num_petals,
            points_per_period: counts.points_per_period,
            random_colors,
        }
    }

    /// Events triggered by the point at the given 1-based `running_count`.
    ///
    /// A zero divisor never matches (valid derived counts are always at least 1).
    pub fn events_at(&self, running_count: u64) -> EmissionEvents {
        EmissionEvents {
            x_sample: divides(running_count, 2 * self.num_petals),
            y_sample: divides(running_count, 4 * self.num_petals),
            color_change: self.random_colors && divides(running_count, 4 * self.points_per_period),
        }
    }
}

fn divides(count: u64, divisor: u64) -> bool {
    divisor != 0 && count % divisor == 0
}
