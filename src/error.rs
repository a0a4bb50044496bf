use crate::config::ConfigField;

/// A CONF field value that does not fit the field's bit width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidFieldValue {
    /// Offending field
    pub field: ConfigField,
    /// Rejected value
    pub value: u8,
}

/// Error type for AS5600 operations
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the sensor
    Communication(E),
    /// Configuration field out of range; nothing was written
    InvalidFieldValue(InvalidFieldValue),
}

impl<E> From<InvalidFieldValue> for Error<E> {
    fn from(err: InvalidFieldValue) -> Self {
        Error::InvalidFieldValue(err)
    }
}
