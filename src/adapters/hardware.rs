//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`LineArray`] and the [`MotorDriver`], exposing them through
//! [`SensorPort`] and [`ActuatorPort`].  This is the only module in the
//! system that touches actual hardware.  On non-espidf targets, the
//! underlying drivers use cfg-gated simulation stubs.

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::control::mixer::MotorOutputs;
use crate::control::LineSnapshot;
use crate::drivers::motors::MotorDriver;
use crate::sensors::LineArray;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    line_array: LineArray,
    motors: MotorDriver,
}

impl HardwareAdapter {
    pub fn new(line_array: LineArray, motors: MotorDriver) -> Self {
        Self { line_array, motors }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_line(&mut self) -> LineSnapshot {
        self.line_array.read()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn drive(&mut self, outputs: &MotorOutputs) {
        self.motors.apply(outputs);
    }

    fn all_stop(&mut self) {
        self.motors.stop();
    }
}
