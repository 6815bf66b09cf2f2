//! Linetracer Firmware — Main Entry Point
//!
//! Hexagonal architecture around a fixed-period reactive loop:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │   HardwareAdapter              SerialSink                │
//! │   (LineArray + MotorDriver)    (EventSink → UART CSV)    │
//! │                                                          │
//! │  ───────────── Port Trait Boundary ─────────────────     │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │            ControlService (pure logic)             │  │
//! │  │  estimate · PD correct · classify · mix            │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use linetracer::adapters::hardware::HardwareAdapter;
use linetracer::adapters::log_sink::SerialSink;
use linetracer::app::service::ControlService;
use linetracer::config::ControlConfig;
use linetracer::drivers::hw_init;
use linetracer::drivers::motors::MotorDriver;
use linetracer::drivers::watchdog::Watchdog;
use linetracer::pins;
use linetracer::sensors::LineArray;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Linetracer v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = Watchdog::new();

    // ── 3. Configuration ──────────────────────────────────────
    let config = ControlConfig::default();

    // ── 4. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(
        LineArray::new(pins::LINE_SENSOR_GPIOS),
        MotorDriver::new(),
    );
    let mut sink = SerialSink::new();

    // ── 5. Construct the control service ──────────────────────
    // Fails fast on config range errors or steering-table conflicts.
    let mut app = ControlService::new(&config)
        .map_err(|e| anyhow::anyhow!("controller init failed: {e}"))?;
    app.start(&mut sink);

    info!("System ready. Entering control loop.");

    // ── 6. Control loop ───────────────────────────────────────
    loop {
        app.tick(&mut hw, &mut sink);
        watchdog.feed();

        #[cfg(target_os = "espidf")]
        esp_idf_hal::delay::FreeRtos::delay_ms(config.control_loop_interval_ms);

        // Simulate the cycle period via sleep on non-espidf targets.
        #[cfg(not(target_os = "espidf"))]
        std::thread::sleep(std::time::Duration::from_millis(
            u64::from(config.control_loop_interval_ms),
        ));
    }
}
