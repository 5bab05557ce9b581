//! Voltage and LED output
//!
//! The core only talks to the DAC through the [`Transmitter`] trait; the
//! SPI-backed implementation lives in [`dac`].

pub mod dac;

pub use dac::DacTransmitter;

use crate::error::Error;
use crate::output::{Led, Output};

/// Default lowest DAC code that still makes an LED glow
pub const DEFAULT_LED_FLOOR: u16 = 27_500;

/// Abstract output channel setter
///
/// Implement this trait to support different hardware platforms.
/// The dispatcher and the animation are generic over this trait.
pub trait Transmitter {
    /// Set the voltage of an output to a raw 16-bit code
    fn set_voltage(&mut self, output: Output, value: u16) -> Result<(), Error>;

    /// Set the brightness of an LED from a raw 16-bit sample.
    ///
    /// Implementations driving real LEDs remap the value with [`led_level`].
    fn set_led_brightness(&mut self, led: Led, value: u16) -> Result<(), Error>;
}

/// Remap a sample linearly into `[floor, 0xffff]`
///
/// 0 maps to `floor` (LED just visible), `0xffff` stays `0xffff`.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn led_level(value: u16, floor: u16) -> u16 {
    let range = (u16::MAX - floor) as u32;
    let scaled = (value as u32 * range) / u16::MAX as u32;
    scaled as u16 + floor
}
