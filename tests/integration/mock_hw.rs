//! Mock hardware adapter for integration tests.
//!
//! Serves a scripted sequence of sensor snapshots and records every drive
//! command so tests can assert on the full command history without
//! touching real GPIO/PWM registers.

use linetracer::app::events::AppEvent;
use linetracer::app::ports::{ActuatorPort, EventSink, SensorPort};
use linetracer::control::mixer::MotorOutputs;
use linetracer::control::LineSnapshot;

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// Snapshots to serve, oldest first; the last one repeats.
    pub snapshots: Vec<LineSnapshot>,
    pub served: usize,
    pub drives: Vec<MotorOutputs>,
    pub stops: usize,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new(snapshots: Vec<LineSnapshot>) -> Self {
        Self {
            snapshots,
            served: 0,
            drives: Vec::new(),
            stops: 0,
        }
    }

    pub fn with_key(key: u8) -> Self {
        Self::new(vec![LineSnapshot::from_key(key)])
    }

    pub fn last_drive(&self) -> Option<&MotorOutputs> {
        self.drives.last()
    }
}

impl SensorPort for MockHardware {
    fn read_line(&mut self) -> LineSnapshot {
        let idx = self.served.min(self.snapshots.len() - 1);
        self.served += 1;
        self.snapshots[idx]
    }
}

impl ActuatorPort for MockHardware {
    fn drive(&mut self, outputs: &MotorOutputs) {
        self.drives.push(*outputs);
    }

    fn all_stop(&mut self) {
        self.stops += 1;
    }
}

// ── Recording event sink ──────────────────────────────────────

pub struct VecSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Cycle diagnostics in emission order.
    pub fn cycles(&self) -> Vec<linetracer::app::events::CycleDiagnostics> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Cycle(d) => Some(*d),
                AppEvent::Started => None,
            })
            .collect()
    }
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for VecSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
