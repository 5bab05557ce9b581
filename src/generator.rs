//! Random sample generation
//!
//! Turns raw 32-bit words from the hardware RNG into 16-bit samples with a
//! uniform or a bell-shaped distribution.

#[cfg(feature = "defmt")]
use defmt::warn;

use crate::error::Error;

/// Raw random word source, usually the MCU's RNG peripheral.
///
/// Implement this trait to support different hardware platforms.
pub trait EntropySource {
    /// Hardware specific failure
    type Error: core::fmt::Debug;

    /// Produce one raw 32-bit random word
    fn next_word(&mut self) -> Result<u32, Self::Error>;

    /// Reinitialise the peripheral, clearing any seed or clock error state
    fn reset(&mut self);
}

/// Number of 16-bit halves summed for one normal sample
const NORMAL_TERMS: u32 = 4;

/// Sample generator on top of an [`EntropySource`]
pub struct Generator<R: EntropySource> {
    source: R,
}

impl<R: EntropySource> Generator<R> {
    pub const fn new(source: R) -> Self {
        Self { source }
    }

    /// One uniform sample: the low half of a raw word
    #[allow(clippy::cast_possible_truncation)]
    pub fn uniform_sample(&mut self) -> Result<u16, Error> {
        let word = self.next_word()?;
        Ok(word as u16)
    }

    /// One normal-ish sample.
    ///
    /// Sums the four 16-bit halves of two raw words and divides by four,
    /// truncating. Cheap, and wide enough to be musically useful.
    #[allow(clippy::cast_possible_truncation)]
    pub fn normal_sample(&mut self) -> Result<u16, Error> {
        let mut sum = 0u32;
        for _ in 0..NORMAL_TERMS / 2 {
            let word = self.next_word()?;
            sum += word & 0xffff;
            sum += word >> 16;
        }
        Ok((sum / NORMAL_TERMS) as u16)
    }

    /// Reinitialise the random source
    pub fn reset(&mut self) {
        self.source.reset();
    }

    pub fn source(&self) -> &R {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }

    fn next_word(&mut self) -> Result<u32, Error> {
        self.source.next_word().map_err(|_error| {
            #[cfg(feature = "defmt")]
            warn!("[Generator] entropy source failed: {}", defmt::Debug2Format(&_error));
            Error::GeneratorFailure
        })
    }
}
