//! GPIO / peripheral pin assignments for the Linetracer chassis board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Reflectance sensor array (TCRT5000 x5, digital comparator outputs)
// ---------------------------------------------------------------------------

/// Digital input: far-left sensor. HIGH = line detected.
pub const IR_FAR_LEFT_GPIO: i32 = 4;
/// Digital input: mid-left sensor.
pub const IR_MID_LEFT_GPIO: i32 = 5;
/// Digital input: center sensor.
pub const IR_CENTER_GPIO: i32 = 6;
/// Digital input: mid-right sensor.
pub const IR_MID_RIGHT_GPIO: i32 = 7;
/// Digital input: far-right sensor.
pub const IR_FAR_RIGHT_GPIO: i32 = 15;

/// The five sensor inputs in left-to-right physical order.
pub const LINE_SENSOR_GPIOS: [i32; 5] = [
    IR_FAR_LEFT_GPIO,
    IR_MID_LEFT_GPIO,
    IR_CENTER_GPIO,
    IR_MID_RIGHT_GPIO,
    IR_FAR_RIGHT_GPIO,
];

// ---------------------------------------------------------------------------
// Drive motors (L298N dual H-bridge)
// ---------------------------------------------------------------------------

/// LEDC PWM channel input (EN A) for left motor speed.
pub const LEFT_PWM_GPIO: i32 = 16;
/// LEDC PWM channel input (EN B) for right motor speed.
pub const RIGHT_PWM_GPIO: i32 = 17;

/// Digital output: left motor forward leg (IN1).
pub const LEFT_FWD_GPIO: i32 = 8;
/// Digital output: left motor reverse leg (IN2).
pub const LEFT_REV_GPIO: i32 = 9;
/// Digital output: right motor forward leg (IN3).
pub const RIGHT_FWD_GPIO: i32 = 10;
/// Digital output: right motor reverse leg (IN4).
pub const RIGHT_REV_GPIO: i32 = 11;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels, matching
/// the H-bridge duty scale the mixer clamps into.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for the drive motors (25 kHz — inaudible).
pub const MOTOR_PWM_FREQ_HZ: u32 = 25_000;

// ---------------------------------------------------------------------------
// UART diagnostics
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 43;
pub const UART_RX_GPIO: i32 = 44;
