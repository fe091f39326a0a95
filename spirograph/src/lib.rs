//! Spirograph curve generation and draw session orchestration.
//!
//! The library is split into a pure side and a side-effecting seam:
//!
//! - [`curve`] maps a [`curve::CurveSpec`] to an ordered point trace plus
//!   derived period/petal counts. Generation is a pure function: same spec,
//!   same trace.
//! - [`emission`] is the cadence policy deciding which points are forwarded
//!   to the coordinate transport and when random pen colors rotate. It is a
//!   pure function of precomputed counts.
//! - [`render`], [`transport`], and [`random`] define the collaborator seams
//!   (drawing surface, OSC-style coordinate stream, random source) that
//!   concrete front ends implement.
//! - [`draw`] is the orchestrator tying the pure outputs to the seams: it
//!   walks the trace in stroke order, draws each segment, applies the
//!   emission cadence, and signals completion.

mod macros;

pub mod core;
pub mod curve;
pub mod draw;
pub mod emission;
pub mod random;
pub mod render;
pub mod transport;
