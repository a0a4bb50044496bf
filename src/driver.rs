//! Asynchronous driver for AS5600 magnetic position sensor

use crate::{
    angle::{AxisCenter, RawAngle, relative_degrees, wrap_error},
    config::{ConfigField, ConfigFields, ConfigWord, LOW_LATENCY_CONFIG},
    diagnostics::DiagnosticRecord,
    error::Error,
    health::SensorHealth,
    interface::{I2cInterface, RegisterInterface},
    noise::SlowFilter,
    register::{AngleRegister, MagnitudeRegister, Register, StatusRegister},
};

/// AS5600 driver instance (asynchronous)
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct As5600<IFACE> {
    iface: IFACE,
}

impl<I2C> As5600<I2cInterface<I2C>>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Create a new AS5600 driver on an I2C bus at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_interface(I2cInterface::new(i2c))
    }
}

impl<IFACE, E> As5600<IFACE>
where
    IFACE: RegisterInterface<Error = E>,
{
    /// Create a driver over any register interface
    pub fn with_interface(iface: IFACE) -> Self {
        Self { iface }
    }

    /// Release the register interface, consuming the driver
    pub fn release(self) -> IFACE {
        self.iface
    }

    async fn read_u8(&mut self, register: Register) -> Result<u8, Error<E>> {
        let mut buf = [0u8; 1];
        self.iface
            .read_registers(register, &mut buf)
            .await
            .map_err(Error::Communication)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("Register 0x{:02X} value: 0x{:02X}", u8::from(register), buf[0]);

        Ok(buf[0])
    }

    /// Read a two-byte register, high byte first
    async fn read_u16(&mut self, register: Register) -> Result<u16, Error<E>> {
        let mut buf = [0u8; 2];
        self.iface
            .read_registers(register, &mut buf)
            .await
            .map_err(Error::Communication)?;

        let value = u16::from_be_bytes(buf);
        #[cfg(feature = "defmt")]
        defmt::trace!("Register 0x{:02X} value: 0x{:04X}", u8::from(register), value);

        Ok(value)
    }

    async fn write_u16(&mut self, register: Register, value: u16) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("Writing 0x{:04X} to register 0x{:02X}", value, u8::from(register));

        self.iface
            .write_registers(register, &value.to_be_bytes())
            .await
            .map_err(Error::Communication)
    }

    /// Get the unscaled 12-bit angle
    ///
    /// Value ranges from 0 to 4095 (0° to 359.912°)
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn raw_angle(&mut self) -> Result<RawAngle, Error<E>> {
        let reg = AngleRegister::from(self.read_u16(Register::RawAngle).await?);
        Ok(RawAngle::new(reg.position()))
    }

    /// Get the scaled and filtered 12-bit angle
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn angle(&mut self) -> Result<RawAngle, Error<E>> {
        let reg = AngleRegister::from(self.read_u16(Register::Angle).await?);
        Ok(RawAngle::new(reg.position()))
    }

    /// Get the STATUS register
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn status(&mut self) -> Result<StatusRegister, Error<E>> {
        self.read_u8(Register::Status).await.map(StatusRegister::from)
    }

    /// Get the automatic gain control value
    ///
    /// In 3.3 V operation the range is 0-128
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn agc(&mut self) -> Result<u8, Error<E>> {
        self.read_u8(Register::Agc).await
    }

    /// Get the 12-bit CORDIC magnitude
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn magnitude(&mut self) -> Result<u16, Error<E>> {
        let value = self.read_u16(Register::Magnitude).await?;
        Ok(MagnitudeRegister::from(value).magnitude())
    }

    /// Read STATUS, AGC and MAGNITUDE into a health snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn health(&mut self) -> Result<SensorHealth, Error<E>> {
        let status = self.status().await?;
        let agc = self.agc().await?;
        let magnitude = self.magnitude().await?;

        let health = SensorHealth::from_registers(status, agc, magnitude);
        #[cfg(feature = "defmt")]
        if !health.is_ok() {
            defmt::warn!("Magnet not in range: {}", health);
        }

        Ok(health)
    }

    /// Get the CONF register
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn config(&mut self) -> Result<ConfigWord, Error<E>> {
        self.read_u16(Register::Conf).await.map(ConfigWord::from_bits)
    }

    /// Write the CONF register
    ///
    /// The setting is volatile and lost on power cycle
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn set_config(&mut self, config: ConfigWord) -> Result<(), Error<E>> {
        self.write_u16(Register::Conf, config.bits()).await
    }

    /// Encode `fields` and write them to CONF
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFieldValue`] without touching the bus if a
    /// field is out of range, or an error if I2C communication fails
    pub async fn configure(&mut self, fields: ConfigFields) -> Result<(), Error<E>> {
        let config = fields.encode()?;
        self.set_config(config).await
    }

    /// Write [`LOW_LATENCY_CONFIG`]: SF=11, FTH=001, PM=NOM
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn configure_low_latency_mode(&mut self) -> Result<(), Error<E>> {
        self.set_config(LOW_LATENCY_CONFIG).await
    }

    /// Select a slow filter and disable the fast filter, keeping every other
    /// CONF field
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn set_slow_filter(&mut self, filter: SlowFilter) -> Result<(), Error<E>> {
        let config = self
            .config()
            .await?
            .with_field(ConfigField::FastFilterThreshold, 0)?
            .with_field(ConfigField::SlowFilter, filter.bits())?;
        self.set_config(config).await
    }

    /// Raw angle relative to `center`, in degrees within `(-180.0, 180.0]`
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn relative_angle(&mut self, center: AxisCenter) -> Result<f32, Error<E>> {
        let raw = self.raw_angle().await?;
        Ok(relative_degrees(raw, center))
    }

    /// Shortest signed step distance from `setpoint` to the current raw angle
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn wrap_error_to(&mut self, setpoint: RawAngle) -> Result<i16, Error<E>> {
        let raw = self.raw_angle().await?;
        Ok(wrap_error(i32::from(raw.steps()), i32::from(setpoint.steps())))
    }

    /// Read health and raw angle into one diagnostic record
    ///
    /// `timestamp_ms` comes from the caller's clock
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn diagnose(
        &mut self,
        timestamp_ms: u64,
        center: Option<AxisCenter>,
    ) -> Result<DiagnosticRecord, Error<E>> {
        let health = self.health().await?;
        let raw = self.raw_angle().await?;
        Ok(DiagnosticRecord::compose(timestamp_ms, health, raw, center))
    }

    /// Fill `samples` with consecutive raw angle readings
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails; readings taken before the
    /// failure are left in `samples`
    pub async fn collect_samples(&mut self, samples: &mut [u16]) -> Result<(), Error<E>> {
        for sample in samples.iter_mut() {
            *sample = self.raw_angle().await?.steps();
        }
        Ok(())
    }
}
