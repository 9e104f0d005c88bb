//! Display bus transports
//!
//! A [`DisplayBus`] is one write session on the wire: assert the
//! session, switch between command and data bytes, stream, release.
//! The controller opens exactly one session per window transaction and
//! is responsible for closing it on every exit path.

use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiBus;
use heapless::Vec;

/// Errors surfaced by the display transports
///
/// There is deliberately no retry or recovery at this layer; a failed
/// transfer propagates out and any policy belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer failed
    BusWrite,
    /// A control pin (chip-select or data/command) could not be driven
    ControlPin,
    /// Operation not supported by the connected controller
    Unsupported,
}

/// Write-only transport session to a display controller
///
/// Implementations must tolerate `set_data_mode` calls when the wiring
/// has no data/command distinction (then it is a no-op).
pub trait DisplayBus {
    /// Open a write session (assert chip-select or start buffering)
    fn begin_session(&mut self) -> Result<(), DisplayError>;

    /// Close the session, releasing any asserted control lines
    fn end_session(&mut self) -> Result<(), DisplayError>;

    /// Switch between command bytes (false) and data bytes (true)
    fn set_data_mode(&mut self, data: bool) -> Result<(), DisplayError>;

    /// Write one byte in the current mode
    fn write(&mut self, byte: u8) -> Result<(), DisplayError>;

    /// Write a block of bytes in the current mode
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        for &byte in bytes {
            self.write(byte)?;
        }
        Ok(())
    }
}

/// 4-wire SPI transport: clock/data plus data-command select
///
/// Both control pins are optional. Boards with a hardwired chip-select
/// pass `None` for `cs`; controllers without a D/C line (rare on SPI,
/// normal on I2C) pass `None` for `dc`, which turns
/// [`set_data_mode`](DisplayBus::set_data_mode) into a no-op.
pub struct SpiInterface<SPI, DC, CS> {
    spi: SPI,
    dc: Option<DC>,
    cs: Option<CS>,
}

impl<SPI, DC, CS> SpiInterface<SPI, DC, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
{
    /// Create a transport from the bus and its control pins
    pub fn new(spi: SPI, dc: Option<DC>, cs: Option<CS>) -> Self {
        Self { spi, dc, cs }
    }

    /// Release the bus and pins
    pub fn release(self) -> (SPI, Option<DC>, Option<CS>) {
        (self.spi, self.dc, self.cs)
    }
}

impl<SPI, DC, CS> DisplayBus for SpiInterface<SPI, DC, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
{
    fn begin_session(&mut self) -> Result<(), DisplayError> {
        if let Some(cs) = self.cs.as_mut() {
            cs.set_low().map_err(|_| DisplayError::ControlPin)?;
        }
        Ok(())
    }

    fn end_session(&mut self) -> Result<(), DisplayError> {
        self.spi.flush().map_err(|_| DisplayError::BusWrite)?;
        if let Some(cs) = self.cs.as_mut() {
            cs.set_high().map_err(|_| DisplayError::ControlPin)?;
        }
        Ok(())
    }

    fn set_data_mode(&mut self, data: bool) -> Result<(), DisplayError> {
        match self.dc.as_mut() {
            Some(dc) => {
                if data {
                    dc.set_high().map_err(|_| DisplayError::ControlPin)
                } else {
                    dc.set_low().map_err(|_| DisplayError::ControlPin)
                }
            }
            // No D/C line wired up: nothing to switch
            None => Ok(()),
        }
    }

    fn write(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.spi.write(&[byte]).map_err(|_| DisplayError::BusWrite)
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.spi.write(bytes).map_err(|_| DisplayError::BusWrite)
    }
}

/// Default 7-bit address for I2C display controllers
pub const I2C_DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte announcing a run of command bytes
const I2C_COMMAND_PREFIX: u8 = 0x00;
/// Control byte announcing a run of data bytes
const I2C_DATA_PREFIX: u8 = 0x40;

/// Capacity of one buffered I2C segment, prefix included
const I2C_SEGMENT: usize = 64;

/// I2C transport with control-byte framing
///
/// I2C has no D/C line; instead every transaction starts with a control
/// byte (0x00 for commands, 0x40 for data). Bytes are buffered into one
/// segment per mode and flushed on mode change, buffer-full, and
/// session end.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
    data_mode: bool,
    buf: Vec<u8, I2C_SEGMENT>,
}

impl<I2C: I2c> I2cInterface<I2C> {
    /// Create a transport talking to the controller at `address`
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            data_mode: false,
            buf: Vec::new(),
        }
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn prefix(data_mode: bool) -> u8 {
        if data_mode {
            I2C_DATA_PREFIX
        } else {
            I2C_COMMAND_PREFIX
        }
    }

    fn reset_segment(&mut self) {
        self.buf.clear();
        // Capacity is never zero, the push cannot fail on a cleared buffer
        let _ = self.buf.push(Self::prefix(self.data_mode));
    }

    fn flush_segment(&mut self) -> Result<(), DisplayError> {
        // Just the prefix means nothing queued
        if self.buf.len() > 1 {
            self.i2c
                .write(self.address, &self.buf)
                .map_err(|_| DisplayError::BusWrite)?;
        }
        self.buf.clear();
        Ok(())
    }
}

impl<I2C: I2c> DisplayBus for I2cInterface<I2C> {
    fn begin_session(&mut self) -> Result<(), DisplayError> {
        self.data_mode = false;
        self.reset_segment();
        Ok(())
    }

    fn end_session(&mut self) -> Result<(), DisplayError> {
        self.flush_segment()
    }

    fn set_data_mode(&mut self, data: bool) -> Result<(), DisplayError> {
        if data != self.data_mode {
            self.flush_segment()?;
            self.data_mode = data;
            self.reset_segment();
        }
        Ok(())
    }

    fn write(&mut self, byte: u8) -> Result<(), DisplayError> {
        if self.buf.is_full() {
            self.flush_segment()?;
            self.reset_segment();
        }
        // Cannot fail: a full buffer was just flushed
        let _ = self.buf.push(byte);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::i2c::{ErrorType as I2cErrorType, Operation, SevenBitAddress};

    #[derive(Default)]
    struct FakeSpi {
        written: Vec<u8, 256>,
        flushes: usize,
    }

    impl embedded_hal::spi::ErrorType for FakeSpi {
        type Error = Infallible;
    }

    impl SpiBus for FakeSpi {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Infallible> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Infallible> {
            for &w in words {
                let _ = self.written.push(w);
            }
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], write: &[u8]) -> Result<(), Infallible> {
            self.write(write)
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Infallible> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Infallible> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakePin {
        high: bool,
    }

    impl embedded_hal::digital::ErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    /// Records each I2C write transaction as (address, payload)
    #[derive(Default)]
    struct FakeI2c {
        writes: Vec<(u8, Vec<u8, 64>), 16>,
    }

    impl I2cErrorType for FakeI2c {
        type Error = Infallible;
    }

    impl I2c<SevenBitAddress> for FakeI2c {
        fn transaction(
            &mut self,
            address: SevenBitAddress,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Infallible> {
            for op in operations {
                if let Operation::Write(bytes) = op {
                    let mut payload = Vec::new();
                    for &b in bytes.iter() {
                        let _ = payload.push(b);
                    }
                    let _ = self.writes.push((address, payload));
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_spi_session_drives_chip_select() {
        let mut bus = SpiInterface::new(
            FakeSpi::default(),
            Some(FakePin::default()),
            Some(FakePin { high: true }),
        );

        bus.begin_session().unwrap();
        assert!(!bus.cs.as_ref().unwrap().high);
        bus.write(0xAB).unwrap();
        bus.end_session().unwrap();
        assert!(bus.cs.as_ref().unwrap().high);
        assert_eq!(bus.spi.written.as_slice(), &[0xAB]);
        assert_eq!(bus.spi.flushes, 1);
    }

    #[test]
    fn test_spi_data_mode_follows_dc_pin() {
        let mut bus = SpiInterface::new(
            FakeSpi::default(),
            Some(FakePin::default()),
            None::<FakePin>,
        );

        bus.set_data_mode(true).unwrap();
        assert!(bus.dc.as_ref().unwrap().high);
        bus.set_data_mode(false).unwrap();
        assert!(!bus.dc.as_ref().unwrap().high);
    }

    #[test]
    fn test_spi_data_mode_noop_without_dc() {
        let mut bus = SpiInterface::new(
            FakeSpi::default(),
            None::<FakePin>,
            None::<FakePin>,
        );

        bus.set_data_mode(true).unwrap();
        bus.set_data_mode(false).unwrap();
        assert!(bus.spi.written.is_empty());
    }

    #[test]
    fn test_i2c_prefixes_command_and_data_segments() {
        let mut bus = I2cInterface::new(FakeI2c::default(), I2C_DEFAULT_ADDRESS);

        bus.begin_session().unwrap();
        bus.write(0xB0).unwrap();
        bus.write(0x02).unwrap();
        bus.set_data_mode(true).unwrap();
        bus.write_all(&[0x11, 0x22]).unwrap();
        bus.end_session().unwrap();

        let writes = &bus.i2c.writes;
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0].0, I2C_DEFAULT_ADDRESS);
        assert_eq!(writes[0].1.as_slice(), &[0x00, 0xB0, 0x02]);
        assert_eq!(writes[1].1.as_slice(), &[0x40, 0x11, 0x22]);
    }

    #[test]
    fn test_i2c_empty_segments_not_sent() {
        let mut bus = I2cInterface::new(FakeI2c::default(), I2C_DEFAULT_ADDRESS);

        bus.begin_session().unwrap();
        bus.set_data_mode(true).unwrap();
        bus.set_data_mode(false).unwrap();
        bus.end_session().unwrap();

        assert!(bus.i2c.writes.is_empty());
    }

    #[test]
    fn test_i2c_flushes_full_segment() {
        let mut bus = I2cInterface::new(FakeI2c::default(), I2C_DEFAULT_ADDRESS);

        bus.begin_session().unwrap();
        bus.set_data_mode(true).unwrap();
        for i in 0..I2C_SEGMENT {
            bus.write(i as u8).unwrap();
        }
        bus.end_session().unwrap();

        // Segment holds capacity-1 payload bytes after the prefix, so
        // the run splits into two transactions
        assert_eq!(bus.i2c.writes.len(), 2);
        assert_eq!(bus.i2c.writes[0].1[0], 0x40);
        assert_eq!(bus.i2c.writes[1].1[0], 0x40);
        let total: usize = bus.i2c.writes.iter().map(|(_, p)| p.len() - 1).sum();
        assert_eq!(total, I2C_SEGMENT);
    }
}
