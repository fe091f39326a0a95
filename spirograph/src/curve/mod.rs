//! Types and functions for spirograph curve generation: parameter specs, derived
//! period/petal counts, and generated point traces.
mod curve_spec;
mod curve_trace;
mod generate;

pub use curve_spec::*;
pub use curve_trace::*;
pub use generate::*;
