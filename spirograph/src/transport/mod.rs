//! Coordinate transport seam: fire-and-forget forwarding of selected curve samples to an
//! external listener.
//!
//! Sends are unacknowledged and unordered-delivery-tolerant: no retry, no backpressure.
//! A send failure propagates as an error and terminates the draw session; nothing is
//! resent. The wire mapping used by concrete transports is `/xcoord` and `/ycoord`
//! carrying a single float argument and `/finished` carrying the literal string `"done"`,
//! always the final message of a session.

use std::io;

/// Error produced by a concrete transport. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("transport io error: {0}")]
    Io(#[from] io::Error),
    #[error("transport send failed: {0}")]
    Send(String),
}

/// Consumer of selected coordinate samples and the end-of-stream signal.
pub trait CoordTransport {
    /// Forward a sampled x coordinate.
    fn send_x(&mut self, x: f64) -> Result<(), TransportError>;

    /// Forward a sampled y coordinate.
    fn send_y(&mut self, y: f64) -> Result<(), TransportError>;

    /// Signal the end of the coordinate stream.
    fn send_finished(&mut self) -> Result<(), TransportError>;
}
