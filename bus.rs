//! Register access the driver needs from the physical bus.

use rppal::i2c::I2c;

/// Byte level register access to a single device.
///
/// Every call is one blocking bus transaction. The driver never issues two
/// transactions concurrently, it owns the channel for the lifetime of a
/// [`Session`](crate::Session).
pub trait BusChannel {
    type Error: std::error::Error + 'static;

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error>;

    fn read_register(&mut self, reg: u8) -> Result<u8, Self::Error>;

    /// Reads `reg` and `reg + 1` as one little-endian word.
    fn read_register16(&mut self, reg: u8) -> Result<u16, Self::Error>;

    /// Fills `buf` starting at `start`, relying on the device to
    /// auto-increment its register pointer. Must be a single transaction.
    fn read_burst(&mut self, start: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

impl BusChannel for I2c {
    type Error = rppal::i2c::Error;

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.smbus_write_byte(reg, value)
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, Self::Error> {
        self.smbus_read_byte(reg)
    }

    fn read_register16(&mut self, reg: u8) -> Result<u16, Self::Error> {
        // SMBus words are transferred low byte first
        self.smbus_read_word(reg)
    }

    fn read_burst(&mut self, start: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.block_read(start, buf)
    }
}

impl<B: BusChannel + ?Sized> BusChannel for &mut B {
    type Error = B::Error;

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        (**self).write_register(reg, value)
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, Self::Error> {
        (**self).read_register(reg)
    }

    fn read_register16(&mut self, reg: u8) -> Result<u16, Self::Error> {
        (**self).read_register16(reg)
    }

    fn read_burst(&mut self, start: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        (**self).read_burst(start, buf)
    }
}
