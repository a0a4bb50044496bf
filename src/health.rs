//! Magnet health derived from STATUS, AGC and MAGNITUDE

use crate::register::StatusRegister;

/// AGC value at full gain in 3.3 V operation
///
/// In 5 V mode the AGC range is 0-255; this crate assumes 3.3 V throughout.
pub const GAIN_FULL_SCALE: u8 = 128;

/// AGC value scaled to percent of [`GAIN_FULL_SCALE`], rounded half up and
/// saturated at 100
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn gain_percent(gain_raw: u8) -> u8 {
    let full = GAIN_FULL_SCALE as u16;
    let percent = (gain_raw as u16 * 100 + full / 2) / full;
    if percent > 100 { 100 } else { percent as u8 }
}

/// Snapshot of the sensor's magnetic field health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorHealth {
    /// MD: a magnet was detected
    pub magnet_detected: bool,
    /// ML: AGC at maximum gain, field too weak
    pub too_weak: bool,
    /// MH: AGC at minimum gain, field too strong
    pub too_strong: bool,
    /// Raw AGC register value
    pub gain_raw: u8,
    /// AGC in percent of the 3.3 V range
    pub gain_percent: u8,
    /// 12-bit CORDIC magnitude
    pub field_magnitude: u16,
}

impl SensorHealth {
    /// Build a snapshot from already-decoded STATUS flags
    #[must_use]
    pub const fn new(
        magnet_detected: bool,
        too_weak: bool,
        too_strong: bool,
        gain_raw: u8,
        magnitude: u16,
    ) -> Self {
        Self {
            magnet_detected,
            too_weak,
            too_strong,
            gain_raw,
            gain_percent: gain_percent(gain_raw),
            field_magnitude: magnitude & 0x0FFF,
        }
    }

    /// Build a snapshot from raw STATUS, AGC and MAGNITUDE register values
    #[must_use]
    pub fn from_registers(status: StatusRegister, agc: u8, magnitude: u16) -> Self {
        Self::new(status.md(), status.ml(), status.mh(), agc, magnitude)
    }

    /// Magnet present and within the recommended field range
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.magnet_detected && !self.too_weak && !self.too_strong
    }
}
