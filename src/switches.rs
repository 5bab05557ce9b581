//! Distribution switches
//!
//! One two-position switch per output: high selects the normal
//! distribution, low the uniform one.

use embedded_hal::digital::InputPin;

use crate::error::Error;
use crate::output::{Distribution, OUTPUT_COUNT};

/// Source of the four switch positions
pub trait SwitchBank {
    /// Read all switches, in panel order
    fn read(&mut self) -> Result<[Distribution; OUTPUT_COUNT], Error>;
}

impl<P: InputPin> SwitchBank for [P; OUTPUT_COUNT] {
    fn read(&mut self) -> Result<[Distribution; OUTPUT_COUNT], Error> {
        let mut distributions = [Distribution::Uniform; OUTPUT_COUNT];
        for (pin, distribution) in self.iter_mut().zip(distributions.iter_mut()) {
            let is_high = pin.is_high().map_err(|_| Error::SwitchFailure)?;
            *distribution = Distribution::from_switch(is_high);
        }
        Ok(distributions)
    }
}
