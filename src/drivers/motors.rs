//! Dual drive-motor driver (L298N H-bridge).
//!
//! Two LEDC PWM channels for speed and four direction GPIOs forming one
//! forward/reverse leg pair per channel.  The pair is always written from a
//! [`Direction`], so the legs can never both go HIGH (which would shoot
//! through the bridge).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real PWM and GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::control::mixer::{ChannelOutput, Direction, MotorOutputs};
use crate::drivers::hw_init;
use crate::pins;

pub struct MotorDriver {
    last: Option<MotorOutputs>,
}

impl MotorDriver {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Apply a full drive command: both duties and both direction pairs.
    pub fn apply(&mut self, outputs: &MotorOutputs) {
        self.write_channel(
            hw_init::LEDC_CH_LEFT,
            pins::LEFT_FWD_GPIO,
            pins::LEFT_REV_GPIO,
            outputs.left,
        );
        self.write_channel(
            hw_init::LEDC_CH_RIGHT,
            pins::RIGHT_FWD_GPIO,
            pins::RIGHT_REV_GPIO,
            outputs.right,
        );
        self.last = Some(*outputs);
    }

    /// Kill both channels: zero duty, both legs LOW (coast).
    pub fn stop(&mut self) {
        for (channel, fwd, rev) in [
            (hw_init::LEDC_CH_LEFT, pins::LEFT_FWD_GPIO, pins::LEFT_REV_GPIO),
            (hw_init::LEDC_CH_RIGHT, pins::RIGHT_FWD_GPIO, pins::RIGHT_REV_GPIO),
        ] {
            hw_init::ledc_set(channel, 0);
            hw_init::gpio_write(fwd, false);
            hw_init::gpio_write(rev, false);
        }
        self.last = None;
    }

    fn write_channel(&self, channel: u32, fwd_pin: i32, rev_pin: i32, cmd: ChannelOutput) {
        let (fwd, rev) = cmd.direction.pin_levels();
        hw_init::gpio_write(fwd_pin, fwd);
        hw_init::gpio_write(rev_pin, rev);
        hw_init::ledc_set(channel, cmd.duty);
    }

    /// The command currently applied, `None` after a stop.
    pub fn last_outputs(&self) -> Option<MotorOutputs> {
        self.last
    }

    pub fn is_stopped(&self) -> bool {
        self.last.is_none()
    }
}
