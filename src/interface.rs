//! Bus capability used by the driver

use embedded_hal_async::i2c::I2c;

use crate::register::Register;

/// Fixed 7-bit I2C address of the AS5600
pub const DEFAULT_ADDRESS: u8 = 0x36;

/// Longest payload sent in one write transaction
const MAX_WRITE_LEN: usize = 2;

/// Raw register access
///
/// The driver needs nothing from the bus beyond reading and writing a run of
/// consecutive registers.
#[allow(async_fn_in_trait)]
pub trait RegisterInterface {
    type Error;

    /// Read `buf.len()` bytes starting at `start`
    async fn read_registers(&mut self, start: Register, buf: &mut [u8])
    -> Result<(), Self::Error>;

    /// Write `data` to consecutive registers starting at `start`
    async fn write_registers(&mut self, start: Register, data: &[u8])
    -> Result<(), Self::Error>;
}

/// [`RegisterInterface`] over an async I2C bus
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Use the sensor at [`DEFAULT_ADDRESS`]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Use a sensor at a different address, e.g. behind a translator
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Release the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RegisterInterface for I2cInterface<I2C> {
    type Error = I2C::Error;

    async fn read_registers(
        &mut self,
        start: Register,
        buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[u8::from(start)], buf).await
    }

    async fn write_registers(
        &mut self,
        start: Register,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut address = u8::from(start);
        for chunk in data.chunks(MAX_WRITE_LEN) {
            let mut frame = [0u8; MAX_WRITE_LEN + 1];
            frame[0] = address;
            frame[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c.write(self.address, &frame[..=chunk.len()]).await?;
            #[allow(clippy::cast_possible_truncation)]
            {
                address = address.wrapping_add(chunk.len() as u8);
            }
        }
        Ok(())
    }
}
