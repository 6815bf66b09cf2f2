//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the logger
//! (which goes to UART / USB-CDC in production).  Cycle diagnostics come
//! out as one CSV line per cycle — `output, base_speed, right_speed,
//! left_speed` — for plotting and gain tuning.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that writes every [`AppEvent`] to the serial console.
pub struct SerialSink;

impl SerialSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SerialSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for SerialSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Cycle(d) => info!("{}", d.csv()),
            AppEvent::Started => info!("START | control loop running"),
        }
    }
}
