//! Steering-to-motor mixer.
//!
//! Converts the signed PD output (plus an optional discrete override) into
//! per-channel PWM duty and direction.  The base forward speed applies only
//! while the correction is effectively zero — any active turn drops it so
//! the chassis pivots instead of arcing.  Duties saturate into the
//! `[duty_min, duty_max]` band: the floor keeps the motors above static
//! friction, the ceiling caps top speed.

use crate::config::ControlConfig;

use super::patterns::Steer;

// ---------------------------------------------------------------------------
// Motor output types
// ---------------------------------------------------------------------------

/// Rotation direction of one motor channel.
///
/// A two-state enum rather than two pin booleans: the H-bridge legs of a
/// channel must never both be HIGH, and the type makes that unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// Levels for the (forward leg, reverse leg) pin pair.  Exactly one is
    /// HIGH for either variant.
    pub const fn pin_levels(self) -> (bool, bool) {
        match self {
            Self::Forward => (true, false),
            Self::Reverse => (false, true),
        }
    }
}

/// Duty and direction for one motor channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOutput {
    /// PWM duty on the 8-bit LEDC scale, already saturated.
    pub duty: u8,
    pub direction: Direction,
}

/// Complete drive command for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotorOutputs {
    pub left: ChannelOutput,
    pub right: ChannelOutput,
}

/// Mixer result plus the intermediate signed speeds for the diagnostic
/// stream.
#[derive(Debug, Clone, Copy)]
pub struct MixResult {
    pub outputs: MotorOutputs,
    pub base_speed: i16,
    pub left_signed: f32,
    pub right_signed: f32,
}

// ---------------------------------------------------------------------------
// MotorMixer
// ---------------------------------------------------------------------------

pub struct MotorMixer {
    turn_threshold: f32,
    base_speed: i16,
    duty_min: u8,
    duty_max: u8,
}

impl MotorMixer {
    pub fn new(config: &ControlConfig) -> Self {
        Self {
            turn_threshold: config.turn_threshold,
            base_speed: config.base_speed,
            duty_min: config.duty_min,
            duty_max: config.duty_max,
        }
    }

    /// Blend the continuous steering output with an optional discrete
    /// override into a drive command.
    ///
    /// The override replaces only the two direction decisions; duties always
    /// come from the signed speed magnitudes, so a table-matched turn still
    /// scales with how hard the PD term is correcting.
    pub fn mix(&self, steer_output: f32, command: Option<Steer>) -> MixResult {
        let base_speed = if steer_output.abs() < self.turn_threshold {
            self.base_speed
        } else {
            0
        };

        let right_signed = f32::from(base_speed) - steer_output;
        let left_signed = f32::from(base_speed) + steer_output;

        let (left_dir, right_dir) = match command {
            Some(Steer::Forward) => (Direction::Forward, Direction::Forward),
            Some(Steer::Left) => (Direction::Reverse, Direction::Forward),
            Some(Steer::Right) => (Direction::Forward, Direction::Reverse),
            None => (
                Self::direction_of(left_signed),
                Self::direction_of(right_signed),
            ),
        };

        MixResult {
            outputs: MotorOutputs {
                left: ChannelOutput {
                    duty: self.saturate(left_signed),
                    direction: left_dir,
                },
                right: ChannelOutput {
                    duty: self.saturate(right_signed),
                    direction: right_dir,
                },
            },
            base_speed,
            left_signed,
            right_signed,
        }
    }

    fn saturate(&self, signed: f32) -> u8 {
        signed
            .abs()
            .clamp(f32::from(self.duty_min), f32::from(self.duty_max)) as u8
    }

    const fn direction_of(signed: f32) -> Direction {
        // zero counts as reverse, matching the H-bridge wiring convention
        if signed > 0.0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }
}
