//! Outbound application events.
//!
//! The [`ControlService`](super::service::ControlService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them — log to serial, collect in
//! a test buffer, etc.

use core::fmt::Write as _;

/// Structured events emitted by the control core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The control service has started.
    Started,

    /// Per-cycle steering diagnostics.
    Cycle(CycleDiagnostics),
}

/// One control cycle's steering numbers, mirrored to the serial stream as
/// a comma-separated line: `output, base_speed, right_speed, left_speed`.
#[derive(Debug, Clone, Copy)]
pub struct CycleDiagnostics {
    /// Signed PD steering output.
    pub steer_output: f32,
    /// Forward base duty selected this cycle (full or zero).
    pub base_speed: i16,
    /// Signed right-channel speed before saturation.
    pub right_speed: f32,
    /// Signed left-channel speed before saturation.
    pub left_speed: f32,
}

impl CycleDiagnostics {
    /// Render the CSV line without heap allocation.  The numeric ranges
    /// involved fit well within the buffer, so formatting cannot truncate.
    pub fn csv(&self) -> heapless::String<64> {
        let mut line = heapless::String::new();
        let _ = write!(
            line,
            "{:.2}, {}, {:.2}, {:.2}",
            self.steer_output, self.base_speed, self.right_speed, self.left_speed
        );
        line
    }
}
