//! Error types for the module core.

use core::fmt;

/// Failures surfaced by the hardware collaborators and the sample pools.
///
/// None of these are fatal: the dispatcher turns every one of them into the
/// status LED error pattern and keeps processing events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The random source reported an unhealthy state.
    GeneratorFailure,

    /// A DAC command did not complete.
    TransferFailure,

    /// A distribution switch could not be read.
    SwitchFailure,

    /// A sample was drawn from an exhausted pool.
    BufferUnderrun,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::GeneratorFailure => write!(f, "random generator failure"),
            Error::TransferFailure => write!(f, "DAC transfer failure"),
            Error::SwitchFailure => write!(f, "distribution switch read failure"),
            Error::BufferUnderrun => write!(f, "sample pool exhausted"),
        }
    }
}

impl core::error::Error for Error {}

/// Keep the first error of a multi-step sequence while letting later steps run
pub(crate) fn keep_first(result: &mut Result<(), Error>, step: Result<(), Error>) {
    if result.is_ok() {
        *result = step;
    }
}
