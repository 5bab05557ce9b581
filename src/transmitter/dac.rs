//! Octal DAC driven over SPI
//!
//! Every channel update is one chip-select framed 3-byte command:
//! `[WRITE_COMMAND + address, value_hi, value_lo]`.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

#[cfg(feature = "defmt")]
use defmt::warn;

use super::{DEFAULT_LED_FLOOR, Transmitter, led_level};
use crate::error::Error;
use crate::output::{Led, Output};

/// "Write and update channel" command nibble
pub const WRITE_COMMAND: u8 = 0x30;

/// How long the reset line is held low
const RESET_PULSE_NS: u32 = 1_000;

/// Build the command frame for one channel update
pub const fn command_frame(address: u8, value: u16) -> [u8; 3] {
    let [high, low] = value.to_be_bytes();
    [WRITE_COMMAND + address, high, low]
}

/// [`Transmitter`] for the front panel DAC
///
/// Chip select and the transfer timeout are handled by the `SpiDevice`
/// implementation.
pub struct DacTransmitter<SPI, RST> {
    spi: SPI,
    reset: RST,
    led_floor: u16,
}

impl<SPI, RST> DacTransmitter<SPI, RST>
where
    SPI: SpiDevice,
    RST: OutputPin,
{
    /// Create a transmitter with the default LED floor
    pub fn new(spi: SPI, reset: RST) -> Self {
        Self::with_led_floor(spi, reset, DEFAULT_LED_FLOOR)
    }

    pub fn with_led_floor(spi: SPI, reset: RST, led_floor: u16) -> Self {
        Self {
            spi,
            reset,
            led_floor,
        }
    }

    /// Pulse the DAC reset line.
    ///
    /// Must run once before the first transfer.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.reset.set_low().map_err(|_| Error::TransferFailure)?;
        delay.delay_ns(RESET_PULSE_NS);
        self.reset.set_high().map_err(|_| Error::TransferFailure)
    }

    pub const fn led_floor(&self) -> u16 {
        self.led_floor
    }

    /// Release the bus and reset pin
    pub fn release(self) -> (SPI, RST) {
        (self.spi, self.reset)
    }

    fn transmit(&mut self, address: u8, value: u16) -> Result<(), Error> {
        self.spi
            .write(&command_frame(address, value))
            .map_err(|_error| {
                #[cfg(feature = "defmt")]
                warn!(
                    "[DacTransmitter] transfer to channel {} failed: {}",
                    address,
                    defmt::Debug2Format(&_error)
                );
                Error::TransferFailure
            })
    }
}

impl<SPI, RST> Transmitter for DacTransmitter<SPI, RST>
where
    SPI: SpiDevice,
    RST: OutputPin,
{
    fn set_voltage(&mut self, output: Output, value: u16) -> Result<(), Error> {
        self.transmit(output.address(), value)
    }

    fn set_led_brightness(&mut self, led: Led, value: u16) -> Result<(), Error> {
        let level = led_level(value, self.led_floor);
        self.transmit(led.address(), level)
    }
}
