//! Angle normalization on the 4096-step ring

/// Steps per full revolution (12-bit: 0-4095, representing 0-360°)
pub const STEPS_PER_REVOLUTION: u16 = 0x0FFF + 1;

/// Degrees covered by one raw step (360 / 4096 ≈ 0.088°)
pub const DEG_PER_STEP: f32 = 360.0 / STEPS_PER_REVOLUTION as f32;

const RING: i32 = STEPS_PER_REVOLUTION as i32;
const HALF_RING: i32 = RING / 2;

/// A raw 12-bit angle sample
///
/// Always holds a value in `0..4096`; constructors reduce their input
/// modulo 4096
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawAngle(u16);

impl RawAngle {
    /// Create a sample from a register value, keeping the low 12 bits
    #[must_use]
    pub const fn new(steps: u16) -> Self {
        Self(steps & (STEPS_PER_REVOLUTION - 1))
    }

    /// Create a sample from any integer step count, reduced modulo 4096
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_steps(steps: i32) -> Self {
        Self(steps.rem_euclid(RING) as u16)
    }

    /// Step count in `0..4096`
    #[must_use]
    pub const fn steps(self) -> u16 {
        self.0
    }

    /// Absolute angle in degrees, `[0, 360)`
    #[must_use]
    pub fn degrees(self) -> f32 {
        f32::from(self.0) * DEG_PER_STEP
    }
}

impl From<u16> for RawAngle {
    fn from(steps: u16) -> Self {
        Self::new(steps)
    }
}

/// Calibrated mechanical zero of an axis, in raw steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisCenter(RawAngle);

impl AxisCenter {
    #[must_use]
    pub const fn new(steps: u16) -> Self {
        Self(RawAngle::new(steps))
    }

    #[must_use]
    pub const fn steps(self) -> u16 {
        self.0.steps()
    }
}

impl From<u16> for AxisCenter {
    fn from(steps: u16) -> Self {
        Self::new(steps)
    }
}

impl From<RawAngle> for AxisCenter {
    fn from(raw: RawAngle) -> Self {
        Self(raw)
    }
}

/// Signed distance of `raw` from `center`, in steps, within `(-2048, 2048]`
///
/// The discontinuity sits on the side opposite the center, so an axis that
/// moves through raw 4095 -> 0 produces a one-step change
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn relative_steps(raw: RawAngle, center: AxisCenter) -> i16 {
    let delta = (raw.steps() as i32 - center.steps() as i32).rem_euclid(RING);
    let delta = if delta > HALF_RING { delta - RING } else { delta };
    delta as i16
}

/// Angle of `raw` relative to `center` in degrees, within `(-180.0, 180.0]`
#[must_use]
pub fn relative_degrees(raw: RawAngle, center: AxisCenter) -> f32 {
    f32::from(relative_steps(raw, center)) * 360.0 / f32::from(STEPS_PER_REVOLUTION)
}

/// Shortest signed path from `setpoint` to `measured`, in steps
///
/// Both inputs are reduced modulo 4096 first, so any integer is accepted. The
/// result lies in `[-2048, 2047]`; exactly antipodal inputs give `-2048`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn wrap_error(measured: i32, setpoint: i32) -> i16 {
    let raw_err = measured.rem_euclid(RING) - setpoint.rem_euclid(RING);
    ((raw_err + HALF_RING).rem_euclid(RING) - HALF_RING) as i16
}
