//! Sensor subsystem — the five-element reflectance array driver.

pub mod line_array;

pub use line_array::LineArray;
