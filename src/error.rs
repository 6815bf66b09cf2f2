#![allow(dead_code)] // I/O fault variants reserved for typed SensorPort/ActuatorPort returns

//! Unified error types for the Linetracer firmware.
//!
//! Follows embedded convention: a single `Error` enum that every subsystem
//! can convert into, keeping the top-level control loop's error handling
//! uniform.  Runtime hardware I/O is fire-and-forget (a failed GPIO read is
//! treated as "line absent"), so the only fatal paths are the startup
//! validations: configuration range checks and steering-table conflicts.
//! All variants are `Copy` so they can be cheaply passed around without
//! allocation.

use core::fmt;

use crate::control::patterns::PatternConflict;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A sensor could not be read or returned an indeterminate level.
    Sensor(SensorError),
    /// An actuator command failed.
    Actuator(ActuatorError),
    /// Two steering-table entries contradict each other for one bit pattern.
    Pattern(PatternConflict),
    /// Configuration failed range validation.
    Config(&'static str),
    /// Peripheral initialisation failed.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Actuator(e) => write!(f, "actuator: {e}"),
            Self::Pattern(e) => write!(f, "steering table: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// GPIO read returned an error.  Policy: the reading is taken as LOW
    /// (line absent) — fail-safe toward "no detection" rather than
    /// fabricating one.
    GpioReadFailed,
    /// A comparator output was neither a clean HIGH nor LOW.
    Indeterminate,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioReadFailed => write!(f, "GPIO read failed"),
            Self::Indeterminate => write!(f, "indeterminate level"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Actuator errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// PWM duty-cycle write failed.
    PwmWriteFailed,
    /// Direction-pin GPIO set failed.
    GpioWriteFailed,
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PwmWriteFailed => write!(f, "PWM write failed"),
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
        }
    }
}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Self::Actuator(e)
    }
}

impl From<PatternConflict> for Error {
    fn from(e: PatternConflict) -> Self {
        Self::Pattern(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
