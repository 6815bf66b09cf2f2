//! System configuration parameters
//!
//! All tunable parameters of the steering controller in one block,
//! externalised so a gain retune is a config change, not a code change.

use serde::{Deserialize, Serialize};

/// Core controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlConfig {
    // --- PD gains ---
    /// Proportional gain on the line-position error.
    pub kp: f32,
    /// Derivative gain on the per-cycle error change.
    pub kd: f32,

    // --- Position estimation ---
    /// Per-sensor position weights, left to right.
    pub sensor_weights: [i16; 5],
    /// Offset subtracted from the weighted average so a centered line
    /// reads as zero error.
    pub center_offset: f32,

    // --- Motor mixing ---
    /// Correction magnitude below which the robot is considered centered
    /// and the forward base speed applies.
    pub turn_threshold: f32,
    /// Forward duty applied when centered; dropped to zero while turning
    /// so turns pivot instead of arcing.
    pub base_speed: i16,
    /// PWM duty floor — enough to overcome static friction.
    pub duty_min: u8,
    /// PWM duty ceiling — caps top speed.
    pub duty_max: u8,

    // --- Timing ---
    /// Control cycle period (milliseconds).
    pub control_loop_interval_ms: u32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            // PD gains (track-tuned)
            kp: 29.0,
            kd: 5.0,

            // Position estimation
            sensor_weights: [0, 10, 20, 30, 40],
            center_offset: 20.0,

            // Motor mixing
            turn_threshold: 0.1,
            base_speed: 220,
            duty_min: 140,
            duty_max: 230,

            // Timing
            control_loop_interval_ms: 10, // 100 Hz
        }
    }
}

impl ControlConfig {
    /// Range-check every field.  Invalid values are rejected, not silently
    /// clamped, so a bad retune fails at boot instead of on the track.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.kp.is_finite() || !self.kd.is_finite() {
            return Err("gains must be finite");
        }
        if !self.turn_threshold.is_finite() || self.turn_threshold <= 0.0 {
            return Err("turn_threshold must be positive");
        }
        if self.duty_min > self.duty_max {
            return Err("duty_min exceeds duty_max");
        }
        if self.base_speed < 0 {
            return Err("base_speed must be non-negative");
        }
        if self.sensor_weights.windows(2).any(|w| w[0] >= w[1]) {
            return Err("sensor_weights must be strictly increasing");
        }
        if self.control_loop_interval_ms == 0 {
            return Err("control_loop_interval_ms must be non-zero");
        }
        Ok(())
    }
}
