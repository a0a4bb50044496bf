//! Health classification and diagnostic record tests.

use as5600_async::{
    AxisCenter, DiagnosticRecord, RawAngle, SensorHealth, StatusRegister, gain_percent,
    relative_degrees,
};

#[test]
fn gain_scales_against_3v3_full_scale() {
    assert_eq!(gain_percent(0), 0);
    assert_eq!(gain_percent(64), 50);
    assert_eq!(gain_percent(128), 100);
    assert_eq!(gain_percent(1), 1);
    assert_eq!(gain_percent(16), 13);
}

#[test]
fn gain_above_full_scale_saturates() {
    assert_eq!(gain_percent(129), 100);
    assert_eq!(gain_percent(255), 100);
}

#[test]
fn status_bits_pass_through() {
    // MD set, ML clear, MH set
    let health = SensorHealth::from_registers(StatusRegister::from(0b0010_1000), 64, 0x0ABC);
    assert!(health.magnet_detected);
    assert!(!health.too_weak);
    assert!(health.too_strong);
    assert_eq!(health.gain_raw, 64);
    assert_eq!(health.gain_percent, 50);
    assert_eq!(health.field_magnitude, 0x0ABC);
    assert!(!health.is_ok());

    let health = SensorHealth::from_registers(StatusRegister::from(0b0001_0000), 128, 0);
    assert!(!health.magnet_detected);
    assert!(health.too_weak);
    assert!(!health.too_strong);
}

#[test]
fn healthy_magnet_is_ok() {
    let health = SensorHealth::new(true, false, false, 70, 2100);
    assert!(health.is_ok());
    assert_eq!(health.gain_percent, 55);
}

#[test]
fn magnitude_is_12_bit() {
    let health = SensorHealth::new(true, false, false, 0, 0xFFFF);
    assert_eq!(health.field_magnitude, 0x0FFF);
}

#[test]
fn record_without_center_has_no_angle() {
    let health = SensorHealth::new(true, false, false, 64, 2000);
    let record = DiagnosticRecord::compose(1234, health, RawAngle::new(413), None);

    assert_eq!(record.timestamp_ms(), 1234);
    assert_eq!(record.health(), &health);
    assert_eq!(record.raw_angle(), RawAngle::new(413));
    assert_eq!(record.relative_degrees(), None);
}

#[test]
fn record_with_center_embeds_relative_angle() {
    let health = SensorHealth::new(true, false, false, 64, 2000);
    let raw = RawAngle::new(500);
    let center = AxisCenter::new(413);
    let record = DiagnosticRecord::compose(50, health, raw, Some(center));

    assert_eq!(record.relative_degrees(), Some(relative_degrees(raw, center)));
}

#[test]
fn identical_inputs_compose_identical_records() {
    let health = SensorHealth::new(false, true, false, 128, 12);
    let center = Some(AxisCenter::new(0));
    let a = DiagnosticRecord::compose(7, health, RawAngle::new(4095), center);
    let b = DiagnosticRecord::compose(7, health, RawAngle::new(4095), center);
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn record_renders_one_line() {
    let health = SensorHealth::new(true, false, false, 64, 2000);
    let center = AxisCenter::new(413);
    let record = DiagnosticRecord::compose(1234, health, RawAngle::new(414), Some(center));
    assert_eq!(
        record.to_string(),
        "DIAG t=1234 md=1 ml=0 mh=0 agc=64 gain=50% mag=2000 raw=414 rel=+0.09"
    );

    let record = DiagnosticRecord::compose(0, health, RawAngle::new(0), None);
    assert_eq!(
        record.to_string(),
        "DIAG t=0 md=1 ml=0 mh=0 agc=64 gain=50% mag=2000 raw=0 rel=-"
    );
}
