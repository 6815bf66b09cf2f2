//! Port traits — the hexagonal boundary between domain logic and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlService (domain)
//! ```
//!
//! Driven adapters (the sensor array, the motor bridge, the diagnostic
//! sink) implement these traits.  The
//! [`ControlService`](super::service::ControlService) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::control::mixer::MotorOutputs;
use crate::control::LineSnapshot;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this exactly once per cycle.
pub trait SensorPort {
    /// Read the five line sensors as one atomic snapshot.
    fn read_line(&mut self) -> LineSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the drive motors.
pub trait ActuatorPort {
    /// Apply the cycle's drive command (duties + directions).
    fn drive(&mut self, outputs: &MotorOutputs);

    /// Kill both motor channels — safe shutdown.
    fn all_stop(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → diagnostics)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, a test
/// buffer, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
