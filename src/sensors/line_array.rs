//! Five-element reflectance sensor array (TCRT5000 comparator boards).
//!
//! Each element outputs a digital HIGH when it sees the line.  All five are
//! read back-to-back into one [`LineSnapshot`] so the estimator and the
//! pattern classifier never see torn readings from different instants.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads real GPIO levels via hw_init helpers.
//! On host/test: decodes a static injected 5-bit pattern (defaults to
//! all-off, i.e. line absent — the fail-safe reading).

use core::sync::atomic::{AtomicU8, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

use crate::control::LineSnapshot;

static SIM_LINE_KEY: AtomicU8 = AtomicU8::new(0);

/// Inject a 5-bit sensor pattern for host-side runs (far-left = MSB).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_line(key: u8) {
    SIM_LINE_KEY.store(key & 0b11111, Ordering::Relaxed);
}

pub struct LineArray {
    gpios: [i32; 5],
    last: LineSnapshot,
}

impl LineArray {
    /// `gpios` in left-to-right physical order.
    pub fn new(gpios: [i32; 5]) -> Self {
        Self {
            gpios,
            last: LineSnapshot::default(),
        }
    }

    /// Read all five elements once.  Reads never fail: an unreadable pin
    /// reports LOW (line absent).
    pub fn read(&mut self) -> LineSnapshot {
        let levels = self.read_levels();
        self.last = LineSnapshot::new(levels[0], levels[1], levels[2], levels[3], levels[4]);
        self.last
    }

    /// Most recent snapshot without re-sampling.
    pub fn last(&self) -> LineSnapshot {
        self.last
    }

    #[cfg(target_os = "espidf")]
    fn read_levels(&self) -> [bool; 5] {
        let mut levels = [false; 5];
        for (level, &pin) in levels.iter_mut().zip(&self.gpios) {
            *level = hw_init::gpio_read(pin);
        }
        levels
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_levels(&self) -> [bool; 5] {
        let _ = self.gpios;
        LineSnapshot::from_key(SIM_LINE_KEY.load(Ordering::Relaxed)).levels()
    }
}
