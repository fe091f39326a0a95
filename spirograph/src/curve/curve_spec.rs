use crate::core::traits::Real;

/// Default angle increment in radians between consecutive curve samples.
///
/// The smaller the increment, the more data points a curve produces.
pub const DEFAULT_ANGLE_STEP: f64 = 0.01;

/// Error produced when a [CurveSpec] fails validation before generation begins.
///
/// Validation happens up front: when a spec is rejected no points are generated and no
/// side effects are produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    /// The spec parameters violate an invariant (zero or negative radius, non-positive
    /// angle step, or derived counts that cannot be represented).
    #[error("invalid curve spec: {reason}")]
    InvalidSpec {
        /// Which constraint failed.
        reason: String,
    },
}

impl CurveError {
    pub(crate) fn invalid_spec(reason: impl Into<String>) -> Self {
        CurveError::InvalidSpec {
            reason: reason.into(),
        }
    }
}

/// Parameters describing a spirograph curve.
///
/// `outer_radius` (R) is the fixed outer circle, `inner_radius` (r) the rolling inner
/// circle, and `pen_offset` (d) the distance of the pen from the inner circle center.
/// The pen offset may be any real value; its magnitude controls the pen distance and its
/// sign flips the trace. Radii are expected to be integer valued so that the Euclidean
/// reduction producing the period/petal counts is exact (see
/// [euclidean_gcd](crate::core::math::euclidean_gcd)).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveSpec<T = f64> {
    /// Radius of the fixed outer circle (R > 0).
    pub outer_radius: T,
    /// Radius of the rolling inner circle (r > 0).
    pub inner_radius: T,
    /// Distance of the pen from the inner circle center (d, any real).
    pub pen_offset: T,
    /// Angle increment in radians between consecutive samples (> 0).
    pub angle_step: T,
}

impl<T> CurveSpec<T>
where
    T: Real,
{
    pub fn new(outer_radius: T, inner_radius: T, pen_offset: T, angle_step: T) -> Self {
        CurveSpec {
            outer_radius,
            inner_radius,
            pen_offset,
            angle_step,
        }
    }

    /// Validate the spec invariants, returning [CurveError::InvalidSpec] naming the first
    /// violated constraint.
    pub fn validate(&self) -> Result<(), CurveError> {
        if !(self.outer_radius > T::zero()) {
            return Err(CurveError::invalid_spec("outer radius must be positive"));
        }

        if !(self.inner_radius > T::zero()) {
            return Err(CurveError::invalid_spec("inner radius must be positive"));
        }

        if !(self.angle_step > T::zero()) {
            return Err(CurveError::invalid_spec("angle step must be positive"));
        }

        Ok(())
    }
}
