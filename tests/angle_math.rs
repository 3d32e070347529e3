#![allow(missing_docs)]
//! Host-level tests for the angle mapping primitives.

use servo_deck::servo::{ANGLE_CENTER_DEG, ANGLE_LIMIT_DEG, duty_for_angle, saturate};

#[test]
fn in_range_angles_shift_by_the_center_offset() {
    for angle in -90i8..=90 {
        let sat = saturate(angle, ANGLE_LIMIT_DEG);
        assert_eq!(i16::from(sat), i16::from(angle) + 90);
        assert!(sat <= 180);
    }
}

#[test]
fn above_limit_pins_to_the_high_stop() {
    for angle in 91i8..=i8::MAX {
        assert_eq!(saturate(angle, ANGLE_LIMIT_DEG), 180);
    }
}

#[test]
fn below_limit_pins_to_the_low_stop() {
    for angle in i8::MIN..=-91 {
        assert_eq!(saturate(angle, ANGLE_LIMIT_DEG), 0);
    }
}

#[test]
fn zero_maps_to_center() {
    assert_eq!(saturate(0, ANGLE_LIMIT_DEG), ANGLE_CENTER_DEG);
}

#[test]
fn smaller_limits_keep_the_same_shape() {
    assert_eq!(saturate(0, 45), 45);
    assert_eq!(saturate(-45, 45), 0);
    assert_eq!(saturate(45, 45), 90);
    assert_eq!(saturate(100, 45), 90);
    assert_eq!(saturate(-100, 45), 0);
}

#[test]
fn duty_is_strictly_monotonic_over_the_domain() {
    for degrees in 0u8..180 {
        assert!(duty_for_angle(degrees) < duty_for_angle(degrees + 1));
    }
}

#[test]
fn duty_end_stops_match_the_pulse_limits() {
    // 0.5 ms, 1.5 ms, and 2.5 ms at 1 µs per tick.
    assert_eq!(duty_for_angle(0), 500);
    assert_eq!(duty_for_angle(ANGLE_CENTER_DEG), 1500);
    assert_eq!(duty_for_angle(180), 2500);
}

#[test]
fn worked_examples_from_the_bench() {
    // +30 from center: absolute 120, a 1.8333 ms pulse.
    assert_eq!(saturate(30, ANGLE_LIMIT_DEG), 120);
    assert_eq!(duty_for_angle(120), 1833);

    // Commands past the limit land on the end-stop pulses.
    assert_eq!(duty_for_angle(saturate(i8::MAX, ANGLE_LIMIT_DEG)), 2500);
    assert_eq!(duty_for_angle(saturate(i8::MIN, ANGLE_LIMIT_DEG)), 500);
}
