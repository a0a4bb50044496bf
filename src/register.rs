//! Register addresses for AS5600 sensor.

/// Register addresses for AS5600
///
/// Multi-byte registers are addressed by their high byte; the low byte
/// follows at the next address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
#[repr(u8)]
pub enum Register {
    /// Number of times ZPOS and MPOS have been burned (2-bit)
    Zmco = 0x00,
    /// Zero position (12-bit)
    ZPos = 0x01,
    /// Maximum position (12-bit)
    MPos = 0x03,
    /// Maximum angle (12-bit)
    MAng = 0x05,
    /// Configuration
    Conf = 0x07,

    /// Magnet status
    Status = 0x0B,
    /// Unscaled and unmodified angle (12-bit)
    RawAngle = 0x0C,
    /// Scaled output angle, filtered (12-bit)
    Angle = 0x0E,
    /// Automatic gain control
    Agc = 0x1A,
    /// CORDIC magnitude (12-bit)
    Magnitude = 0x1B,
    /// OTP burn commands
    Burn = 0xFF,
}

impl From<Register> for u8 {
    fn from(reg: Register) -> u8 {
        reg as u8
    }
}

bitfield::bitfield! {
    /// STATUS
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct StatusRegister(u8);
    impl Debug;
    u8;
    /// MD: magnet was detected
    pub md, _: 5;
    /// ML: AGC maximum gain overflow, magnet too weak
    pub ml, _: 4;
    /// MH: AGC minimum gain overflow, magnet too strong
    pub mh, _: 3;
}

bitfield::bitfield! {
    /// RAW ANGLE, ANGLE, ZPOS, MPOS, MANG
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct AngleRegister(u16);
    impl Debug;
    u16;
    /// 12-bit position
    pub position, _: 11, 0;
}

bitfield::bitfield! {
    /// MAGNITUDE
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct MagnitudeRegister(u16);
    impl Debug;
    u16;
    /// CORDIC magnitude information
    pub magnitude, _: 11, 0;
}

impl From<u8> for StatusRegister {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl From<u16> for AngleRegister {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<u16> for MagnitudeRegister {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}
