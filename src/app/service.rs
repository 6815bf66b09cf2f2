//! Control service — the hexagonal core.
//!
//! [`ControlService`] owns the estimator, PD corrector, pattern table, and
//! mixer, plus the single piece of cross-cycle state: the previous position
//! error.  All I/O flows through port traits injected at call sites, making
//! the entire service testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌─────────────────────────────┐ ──▶ EventSink
//!                 │        ControlService        │
//! ActuatorPort ◀──│ estimate · PD · classify mix │
//!                 └─────────────────────────────┘
//! ```

use log::info;

use crate::config::ControlConfig;
use crate::control::estimator::PositionEstimator;
use crate::control::mixer::MotorMixer;
use crate::control::patterns::PatternTable;
use crate::control::pd::PdCorrector;
use crate::error::Error;

use super::events::{AppEvent, CycleDiagnostics};
use super::ports::{ActuatorPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// ControlService
// ───────────────────────────────────────────────────────────────

/// The control service orchestrates one steering cycle at a time.
pub struct ControlService {
    estimator: PositionEstimator,
    pd: PdCorrector,
    table: PatternTable,
    mixer: MotorMixer,
    /// Position error of the previous cycle; seeds the derivative term.
    previous_error: f32,
    cycle_count: u64,
}

impl ControlService {
    /// Construct the service from configuration.
    ///
    /// Fails fast on invalid config ranges or a contradictory steering
    /// table — both are boot-time defects, not runtime conditions.
    pub fn new(config: &ControlConfig) -> Result<Self, Error> {
        config.validate().map_err(Error::Config)?;
        let table = PatternTable::empirical()?;
        info!("steering table compiled ({} patterns)", table.len());

        Ok(Self {
            estimator: PositionEstimator::new(config),
            pd: PdCorrector::new(config),
            table,
            mixer: MotorMixer::new(config),
            previous_error: 0.0,
            cycle_count: 0,
        })
    }

    /// Announce startup through the sink.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!("ControlService started");
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full control cycle: sample → estimate → correct → classify
    /// → mix → drive.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(&mut self, hw: &mut (impl SensorPort + ActuatorPort), sink: &mut impl EventSink) {
        self.cycle_count += 1;

        // 1. One atomic sensor snapshot, shared by both interpretations.
        let snapshot = hw.read_line();

        // 2. Continuous correction; the derivative consumes last cycle's
        //    error, then the state advances.
        let error = self.estimator.estimate(&snapshot);
        let output = self.pd.correct(error, self.previous_error);
        self.previous_error = error;

        // 3. Discrete override, if the pattern is a known turn/junction shape.
        let command = self.table.classify(&snapshot);

        // 4. Mix and drive.
        let mix = self.mixer.mix(output, command);
        hw.drive(&mix.outputs);

        // 5. Diagnostic record for the serial stream.
        sink.emit(&AppEvent::Cycle(CycleDiagnostics {
            steer_output: output,
            base_speed: mix.base_speed,
            right_speed: mix.right_signed,
            left_speed: mix.left_signed,
        }));
    }

    // ── Queries ───────────────────────────────────────────────

    /// Position error retained from the last cycle.
    pub fn previous_error(&self) -> f32 {
        self.previous_error
    }

    /// Total control cycles executed since startup.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_config() {
        let mut config = ControlConfig::default();
        config.control_loop_interval_ms = 0;
        assert!(matches!(
            ControlService::new(&config),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn fresh_service_has_zero_history() {
        let app = ControlService::new(&ControlConfig::default()).unwrap();
        assert_eq!(app.previous_error(), 0.0);
        assert_eq!(app.cycle_count(), 0);
    }
}
