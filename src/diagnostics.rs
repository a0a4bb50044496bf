//! Diagnostic record combining health and angle

use core::fmt;

use crate::{
    angle::{AxisCenter, RawAngle, relative_degrees},
    health::SensorHealth,
};

/// One diagnostic snapshot
///
/// Field order is fixed: timestamp, health, raw angle, relative angle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DiagnosticRecord {
    timestamp_ms: u64,
    health: SensorHealth,
    raw_angle: RawAngle,
    relative_degrees: Option<f32>,
}

impl DiagnosticRecord {
    /// Compose a record; the relative angle is present only with a center
    #[must_use]
    pub fn compose(
        timestamp_ms: u64,
        health: SensorHealth,
        raw_angle: RawAngle,
        center: Option<AxisCenter>,
    ) -> Self {
        Self {
            timestamp_ms,
            health,
            raw_angle,
            relative_degrees: center.map(|center| relative_degrees(raw_angle, center)),
        }
    }

    /// Milliseconds since the caller's monotonic epoch
    #[must_use]
    pub const fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    #[must_use]
    pub const fn health(&self) -> &SensorHealth {
        &self.health
    }

    #[must_use]
    pub const fn raw_angle(&self) -> RawAngle {
        self.raw_angle
    }

    /// Angle relative to the axis center, in `(-180.0, 180.0]`
    #[must_use]
    pub const fn relative_degrees(&self) -> Option<f32> {
        self.relative_degrees
    }
}

/// Single line, fixed key order:
/// `DIAG t=.. md=.. ml=.. mh=.. agc=.. gain=..% mag=.. raw=.. rel=..`
impl fmt::Display for DiagnosticRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let health = &self.health;
        write!(
            f,
            "DIAG t={} md={} ml={} mh={} agc={} gain={}% mag={} raw={}",
            self.timestamp_ms,
            u8::from(health.magnet_detected),
            u8::from(health.too_weak),
            u8::from(health.too_strong),
            health.gain_raw,
            health.gain_percent,
            health.field_magnitude,
            self.raw_angle.steps(),
        )?;
        match self.relative_degrees {
            Some(degrees) => write!(f, " rel={degrees:+.2}"),
            None => f.write_str(" rel=-"),
        }
    }
}
