//! CONF register (0x07/0x08) codec

use crate::error::InvalidFieldValue;

/// Named sub-fields of the CONF register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigField {
    /// WD: watchdog, bit 13
    Watchdog,
    /// FTH: fast filter threshold, bits 12:10
    FastFilterThreshold,
    /// SF: slow filter, bits 9:8
    SlowFilter,
    /// PWMF: PWM frequency, bits 7:6
    PwmFrequency,
    /// OUTS: output stage, bits 5:4
    OutputStage,
    /// HYST: hysteresis, bits 3:2
    Hysteresis,
    /// PM: power mode, bits 1:0
    PowerMode,
}

impl ConfigField {
    /// All fields, most significant first
    pub const ALL: [ConfigField; 7] = [
        ConfigField::Watchdog,
        ConfigField::FastFilterThreshold,
        ConfigField::SlowFilter,
        ConfigField::PwmFrequency,
        ConfigField::OutputStage,
        ConfigField::Hysteresis,
        ConfigField::PowerMode,
    ];

    /// Bit position of the field's least significant bit
    #[must_use]
    pub const fn offset(self) -> u16 {
        match self {
            ConfigField::Watchdog => 13,
            ConfigField::FastFilterThreshold => 10,
            ConfigField::SlowFilter => 8,
            ConfigField::PwmFrequency => 6,
            ConfigField::OutputStage => 4,
            ConfigField::Hysteresis => 2,
            ConfigField::PowerMode => 0,
        }
    }

    /// Width of the field in bits
    #[must_use]
    pub const fn width(self) -> u16 {
        match self {
            ConfigField::Watchdog => 1,
            ConfigField::FastFilterThreshold => 3,
            _ => 2,
        }
    }

    /// Largest value the field can hold
    #[must_use]
    pub const fn max_value(self) -> u8 {
        #[allow(clippy::cast_possible_truncation)]
        let max = ((1u16 << self.width()) - 1) as u8;
        max
    }

    /// Mask of the field within the CONF word
    #[must_use]
    pub const fn mask(self) -> u16 {
        (self.max_value() as u16) << self.offset()
    }
}

/// SF bits of the CONF word
pub const CONF_SF_MASK: u16 = ConfigField::SlowFilter.mask();
/// FTH bits of the CONF word
pub const CONF_FTH_MASK: u16 = ConfigField::FastFilterThreshold.mask();

const CONF_USED_MASK: u16 = {
    let mut mask = 0;
    let mut i = 0;
    while i < ConfigField::ALL.len() {
        mask |= ConfigField::ALL[i].mask();
        i += 1;
    }
    mask
};

/// Decoded CONF register
///
/// Every field is a raw value; [`ConfigFields::encode`] checks it against the
/// field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigFields {
    pub watchdog: u8,
    pub fast_filter_threshold: u8,
    pub slow_filter: u8,
    pub pwm_frequency: u8,
    pub output_stage: u8,
    pub hysteresis: u8,
    pub power_mode: u8,
}

impl ConfigFields {
    /// Fastest settling: SF=11 (2x), FTH=001, PM=NOM, everything else off
    pub const LOW_LATENCY: Self = Self {
        watchdog: 0,
        fast_filter_threshold: 1,
        slow_filter: 3,
        pwm_frequency: 0,
        output_stage: 0,
        hysteresis: 0,
        power_mode: 0,
    };

    /// Value of a single field
    #[must_use]
    pub const fn get(&self, field: ConfigField) -> u8 {
        match field {
            ConfigField::Watchdog => self.watchdog,
            ConfigField::FastFilterThreshold => self.fast_filter_threshold,
            ConfigField::SlowFilter => self.slow_filter,
            ConfigField::PwmFrequency => self.pwm_frequency,
            ConfigField::OutputStage => self.output_stage,
            ConfigField::Hysteresis => self.hysteresis,
            ConfigField::PowerMode => self.power_mode,
        }
    }

    /// Pack the fields into a CONF word
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFieldValue`] for the first field, in register order,
    /// whose value does not fit its bit width
    pub const fn encode(&self) -> Result<ConfigWord, InvalidFieldValue> {
        let mut bits = 0u16;
        let mut i = 0;
        while i < ConfigField::ALL.len() {
            let field = ConfigField::ALL[i];
            let value = self.get(field);
            if value > field.max_value() {
                return Err(InvalidFieldValue { field, value });
            }
            bits |= (value as u16) << field.offset();
            i += 1;
        }
        Ok(ConfigWord(bits))
    }
}

/// Packed 16-bit CONF register value
///
/// Reserved bits 15:14 are always zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigWord(u16);

impl ConfigWord {
    /// Wrap a raw register value, dropping reserved bits
    #[must_use]
    pub const fn from_bits(raw: u16) -> Self {
        Self(raw & CONF_USED_MASK)
    }

    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Value of a single field
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn field(self, field: ConfigField) -> u8 {
        ((self.0 & field.mask()) >> field.offset()) as u8
    }

    /// Unpack every field
    #[must_use]
    pub const fn decode(self) -> ConfigFields {
        ConfigFields {
            watchdog: self.field(ConfigField::Watchdog),
            fast_filter_threshold: self.field(ConfigField::FastFilterThreshold),
            slow_filter: self.field(ConfigField::SlowFilter),
            pwm_frequency: self.field(ConfigField::PwmFrequency),
            output_stage: self.field(ConfigField::OutputStage),
            hysteresis: self.field(ConfigField::Hysteresis),
            power_mode: self.field(ConfigField::PowerMode),
        }
    }

    /// Copy of this word with one field replaced
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFieldValue`] if `value` does not fit the field
    pub const fn with_field(
        self,
        field: ConfigField,
        value: u8,
    ) -> Result<Self, InvalidFieldValue> {
        if value > field.max_value() {
            return Err(InvalidFieldValue { field, value });
        }
        Ok(Self((self.0 & !field.mask()) | ((value as u16) << field.offset())))
    }

    /// Big-endian register bytes, CONF high (0x07) first
    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for ConfigWord {
    fn from(raw: u16) -> Self {
        Self::from_bits(raw)
    }
}

impl From<ConfigWord> for u16 {
    fn from(word: ConfigWord) -> u16 {
        word.0
    }
}

impl TryFrom<ConfigFields> for ConfigWord {
    type Error = InvalidFieldValue;

    fn try_from(fields: ConfigFields) -> Result<Self, Self::Error> {
        fields.encode()
    }
}

impl From<ConfigWord> for ConfigFields {
    fn from(word: ConfigWord) -> Self {
        word.decode()
    }
}

/// Low-latency CONF word, `0x0700`
pub const LOW_LATENCY_CONFIG: ConfigWord = match ConfigFields::LOW_LATENCY.encode() {
    Ok(word) => word,
    Err(_) => panic!("low-latency preset does not fit the CONF layout"),
};

const _: () = assert!(LOW_LATENCY_CONFIG.bits() == 0x0700);
const _: () = assert!(CONF_USED_MASK == 0x3FFF);
