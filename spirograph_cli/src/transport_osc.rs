//! OSC/UDP coordinate transport: fire-and-forget messages to a fixed local endpoint.

use nannou_osc as osc;

use spirograph::transport::{CoordTransport, TransportError};

/// Transport sending `/xcoord`, `/ycoord`, and `/finished` messages over UDP.
///
/// Coordinates are narrowed to f32 on the wire. Sends are unacknowledged; a
/// communication failure surfaces as [TransportError::Send] and is never retried.
pub struct OscTransport {
    sender: osc::Sender<osc::Connected>,
}

impl OscTransport {
    /// Bind a local UDP socket and connect it to `target` (e.g. `127.0.0.1:4559`).
    pub fn connect(target: &str) -> Result<Self, TransportError> {
        let sender = osc::sender()
            .map_err(|error| TransportError::Send(error.to_string()))?
            .connect(target)
            .map_err(|error| TransportError::Send(error.to_string()))?;
        Ok(OscTransport { sender })
    }

    fn send(&self, addr: &str, args: Vec<osc::Type>) -> Result<(), TransportError> {
        self.sender
            .send((addr.to_string(), args))
            .map_err(|error| TransportError::Send(error.to_string()))?;
        Ok(())
    }
}

impl CoordTransport for OscTransport {
    fn send_x(&mut self, x: f64) -> Result<(), TransportError> {
        self.send("/xcoord", vec![osc::Type::Float(x as f32)])
    }

    fn send_y(&mut self, y: f64) -> Result<(), TransportError> {
        self.send("/ycoord", vec![osc::Type::Float(y as f32)])
    }

    fn send_finished(&mut self) -> Result<(), TransportError> {
        self.send("/finished", vec![osc::Type::String("done".to_string())])
    }
}
