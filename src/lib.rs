#![no_std]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod angle;
pub mod config;
mod diagnostics;
mod driver;
mod error;
mod health;
mod interface;
mod noise;
mod register;

pub use angle::{
    AxisCenter, DEG_PER_STEP, RawAngle, STEPS_PER_REVOLUTION, relative_degrees, wrap_error,
};
pub use config::{
    CONF_FTH_MASK, CONF_SF_MASK, ConfigField, ConfigFields, ConfigWord, LOW_LATENCY_CONFIG,
};
pub use diagnostics::DiagnosticRecord;
pub use driver::As5600;
pub use error::{Error, InvalidFieldValue};
pub use health::{GAIN_FULL_SCALE, SensorHealth, gain_percent};
pub use interface::{DEFAULT_ADDRESS, I2cInterface, RegisterInterface};
pub use noise::{NoiseStats, SlowFilter};
pub use register::{Register, StatusRegister};
