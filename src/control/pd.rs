//! PD steering corrector.
//!
//! Proportional-derivative only — no integral term.  The controller has no
//! persistent long-run bias to correct, only transient line-centering, so an
//! integral would just add windup risk.  The previous-cycle error is owned
//! by the control service and threaded in explicitly; `correct` itself is a
//! pure function of its two inputs.

use crate::config::ControlConfig;

pub struct PdCorrector {
    kp: f32,
    kd: f32,
}

impl PdCorrector {
    pub fn new(config: &ControlConfig) -> Self {
        Self {
            kp: config.kp,
            kd: config.kd,
        }
    }

    /// Signed steering output for the current error given the previous
    /// cycle's error.
    pub fn correct(&self, error: f32, previous_error: f32) -> f32 {
        let derivative = error - previous_error;
        self.kp * error + self.kd * derivative
    }
}
