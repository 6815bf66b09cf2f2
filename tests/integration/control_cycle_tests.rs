//! Integration tests for the ControlService → mixer → actuator pipeline.
//!
//! These run on the host (x86_64) and verify that a full control cycle —
//! sample, estimate, correct, classify, drive — produces the expected
//! drive commands and diagnostics without any real hardware.

use crate::mock_hw::{MockHardware, VecSink};

use linetracer::app::service::ControlService;
use linetracer::config::ControlConfig;
use linetracer::control::mixer::Direction;
use linetracer::control::LineSnapshot;

fn make_app() -> (ControlService, VecSink) {
    let mut sink = VecSink::new();
    let mut app = ControlService::new(&ControlConfig::default()).unwrap();
    app.start(&mut sink);
    (app, sink)
}

// ── Lost line: all sensors off ────────────────────────────────

#[test]
fn all_off_drives_straight_at_base_speed() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::with_key(0b00000);

    app.tick(&mut hw, &mut sink);

    let drive = hw.last_drive().unwrap();
    assert_eq!(drive.left.duty, 220);
    assert_eq!(drive.right.duty, 220);
    assert_eq!(drive.left.direction, Direction::Forward);
    assert_eq!(drive.right.direction, Direction::Forward);

    let d = sink.cycles()[0];
    assert_eq!(d.steer_output, 0.0);
    assert_eq!(d.base_speed, 220);
    assert_eq!(d.csv().as_str(), "0.00, 220, 220.00, 220.00");
}

// ── Full crossing: all sensors on ─────────────────────────────

#[test]
fn all_on_drives_straight_like_all_off() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::with_key(0b11111);

    app.tick(&mut hw, &mut sink);

    // weighted average is dead center, and the table says forward anyway
    let drive = hw.last_drive().unwrap();
    assert_eq!(drive.left.direction, Direction::Forward);
    assert_eq!(drive.right.direction, Direction::Forward);
    assert_eq!((drive.left.duty, drive.right.duty), (220, 220));
}

// ── Far-left only: override beats the continuous sign ─────────

#[test]
fn far_left_only_pivots_right_with_saturated_duties() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::with_key(0b10000);

    app.tick(&mut hw, &mut sink);

    // error = 0/1 - 20 = -20; first cycle: Kp*-20 + Kd*(-20 - 0) = -680
    let d = sink.cycles()[0];
    assert_eq!(d.steer_output, -680.0);
    assert_eq!(d.base_speed, 0);
    assert_eq!(d.right_speed, 680.0);
    assert_eq!(d.left_speed, -680.0);

    // the continuous sign would reverse the left channel, but the table
    // maps this pattern to a hard right: left forward, right reverse
    let drive = hw.last_drive().unwrap();
    assert_eq!(drive.left.direction, Direction::Forward);
    assert_eq!(drive.right.direction, Direction::Reverse);

    // duties saturate at the ceiling
    assert_eq!((drive.left.duty, drive.right.duty), (230, 230));
}

// ── Derivative settles on repeated error ──────────────────────

#[test]
fn repeated_error_leaves_proportional_term_only() {
    let (mut app, mut sink) = make_app();
    // far-right only: error = 40/1 - 20 = +20, twice in a row
    let mut hw = MockHardware::new(vec![
        LineSnapshot::from_key(0b00001),
        LineSnapshot::from_key(0b00001),
    ]);

    app.tick(&mut hw, &mut sink);
    app.tick(&mut hw, &mut sink);

    let cycles = sink.cycles();
    // cycle 1: Kp*20 + Kd*(20 - 0)
    assert_eq!(cycles[0].steer_output, 29.0 * 20.0 + 5.0 * 20.0);
    // cycle 2: derivative vanished
    assert_eq!(cycles[1].steer_output, 29.0 * 20.0);
    assert_eq!(app.previous_error(), 20.0);
    assert_eq!(app.cycle_count(), 2);
}

// ── Unmapped pattern: PD direction governs ────────────────────

#[test]
fn unmapped_pattern_steers_by_continuous_sign() {
    let (mut app, mut sink) = make_app();
    // 0b01111 never appears in the table; error = (10+20+30+40)/4 - 20 = 5
    let mut hw = MockHardware::with_key(0b01111);

    app.tick(&mut hw, &mut sink);

    let d = sink.cycles()[0];
    // Kp*5 + Kd*(5 - 0) = 170
    assert_eq!(d.steer_output, 170.0);

    // right_signed = 0 - 170 < 0 → reverse; left_signed = +170 → forward
    let drive = hw.last_drive().unwrap();
    assert_eq!(drive.left.direction, Direction::Forward);
    assert_eq!(drive.right.direction, Direction::Reverse);
    assert_eq!((drive.left.duty, drive.right.duty), (170, 170));
}

// ── One snapshot per cycle ────────────────────────────────────

#[test]
fn each_cycle_samples_exactly_once() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::with_key(0b00100);

    for _ in 0..5 {
        app.tick(&mut hw, &mut sink);
    }

    assert_eq!(hw.served, 5, "one sensor read per cycle");
    assert_eq!(hw.drives.len(), 5, "one drive command per cycle");
    assert_eq!(sink.cycles().len(), 5, "one diagnostic record per cycle");
}
