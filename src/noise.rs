//! Slow filter settings and angular noise statistics

use crate::angle::DEG_PER_STEP;

/// Slow filter (SF) setting
///
/// Lower settings average more samples: slower settling, less noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SlowFilter {
    /// SF=00, 16x
    X16 = 0,
    /// SF=01, 8x
    X8 = 1,
    /// SF=10, 4x
    X4 = 2,
    /// SF=11, 2x
    X2 = 3,
}

impl SlowFilter {
    pub const ALL: [SlowFilter; 4] = [
        SlowFilter::X16,
        SlowFilter::X8,
        SlowFilter::X4,
        SlowFilter::X2,
    ];

    /// SF field value
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Setting for an SF field value, using the low two bits
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => SlowFilter::X16,
            1 => SlowFilter::X8,
            2 => SlowFilter::X4,
            _ => SlowFilter::X2,
        }
    }

    /// Step response settling time from the datasheet, in microseconds
    #[must_use]
    pub const fn settling_time_us(self) -> u16 {
        match self {
            SlowFilter::X16 => 2200,
            SlowFilter::X8 => 1100,
            SlowFilter::X4 => 550,
            SlowFilter::X2 => 286,
        }
    }

    /// Typical RMS output noise from the datasheet, in millidegrees
    #[must_use]
    pub const fn rms_noise_mdeg(self) -> u8 {
        match self {
            SlowFilter::X16 => 15,
            SlowFilter::X8 => 21,
            SlowFilter::X4 => 30,
            SlowFilter::X2 => 43,
        }
    }
}

/// Noise statistics over a window of raw samples taken with the magnet
/// stationary
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoiseStats {
    pub n: usize,
    /// Mean, in steps
    pub mean: f32,
    pub min: u16,
    pub max: u16,
    /// Peak-to-peak range, in steps
    pub pp_steps: u16,
    /// Population standard deviation, in steps
    pub rms_steps: f32,
}

impl NoiseStats {
    /// Statistics of `samples`, or `None` when empty
    ///
    /// Samples are used as-is; a window straddling the 4095/0 boundary
    /// reports a range close to a full revolution.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_samples(samples: &[u16]) -> Option<Self> {
        let (&first, rest) = samples.split_first()?;
        let (min, max, sum) = rest.iter().fold(
            (first, first, u64::from(first)),
            |(min, max, sum), &s| (min.min(s), max.max(s), sum + u64::from(s)),
        );

        let n = samples.len();
        let mean = sum as f32 / n as f32;
        let variance = samples
            .iter()
            .map(|&s| {
                let d = f32::from(s) - mean;
                d * d
            })
            .sum::<f32>()
            / n as f32;

        Some(Self {
            n,
            mean,
            min,
            max,
            pp_steps: max - min,
            rms_steps: libm::sqrtf(variance),
        })
    }

    /// Peak-to-peak range in degrees
    #[must_use]
    pub fn pp_degrees(&self) -> f32 {
        f32::from(self.pp_steps) * DEG_PER_STEP
    }

    /// RMS deviation in degrees
    #[must_use]
    pub fn rms_degrees(&self) -> f32 {
        self.rms_steps * DEG_PER_STEP
    }
}
