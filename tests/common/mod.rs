#![allow(dead_code)]

use std::collections::VecDeque;

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, InputPin, OutputPin};
use embedded_hal::spi::{self, ErrorKind, Operation, SpiDevice};
use random_cv::{Distribution, EntropySource, Error, Led, OUTPUT_COUNT, Output, SwitchBank, Transmitter};

/// One recorded transmitter call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    Voltage(Output, u16),
    Led(Led, u16),
}

/// Transmitter that records every call and can be told to fail
#[derive(Debug, Default)]
pub struct RecordingTransmitter {
    pub transfers: Vec<Transfer>,
    pub fail_all: bool,
    pub calls: usize,
}

impl RecordingTransmitter {
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    pub fn voltages(&self) -> Vec<(Output, u16)> {
        self.transfers
            .iter()
            .filter_map(|transfer| match *transfer {
                Transfer::Voltage(output, value) => Some((output, value)),
                Transfer::Led(..) => None,
            })
            .collect()
    }

    pub fn leds(&self) -> Vec<(Led, u16)> {
        self.transfers
            .iter()
            .filter_map(|transfer| match *transfer {
                Transfer::Led(led, value) => Some((led, value)),
                Transfer::Voltage(..) => None,
            })
            .collect()
    }

    fn record(&mut self, transfer: Transfer) -> Result<(), Error> {
        self.calls += 1;
        if self.fail_all {
            return Err(Error::TransferFailure);
        }
        self.transfers.push(transfer);
        Ok(())
    }
}

impl Transmitter for RecordingTransmitter {
    fn set_voltage(&mut self, output: Output, value: u16) -> Result<(), Error> {
        self.record(Transfer::Voltage(output, value))
    }

    fn set_led_brightness(&mut self, led: Led, value: u16) -> Result<(), Error> {
        self.record(Transfer::Led(led, value))
    }
}

/// Entropy source replaying a script, then counting up from `next`
#[derive(Debug, Default)]
pub struct ScriptedEntropy {
    pub script: VecDeque<Result<u32, ()>>,
    pub next: u32,
    pub fail_all: bool,
    pub draws: usize,
    pub resets: usize,
}

impl ScriptedEntropy {
    pub fn counting_from(next: u32) -> Self {
        Self {
            next,
            ..Self::default()
        }
    }

    pub fn scripted(script: &[Result<u32, ()>]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }
}

impl EntropySource for ScriptedEntropy {
    type Error = ();

    fn next_word(&mut self) -> Result<u32, ()> {
        self.draws += 1;
        if self.fail_all {
            return Err(());
        }
        if let Some(word) = self.script.pop_front() {
            return word;
        }
        let word = self.next;
        self.next = self.next.wrapping_add(1);
        Ok(word)
    }

    fn reset(&mut self) {
        self.resets += 1;
    }
}

/// Switch bank with settable positions
#[derive(Debug, Default)]
pub struct FakeSwitches {
    pub positions: [Distribution; OUTPUT_COUNT],
    pub reads: usize,
    pub fail: bool,
}

impl FakeSwitches {
    pub fn with(positions: [Distribution; OUTPUT_COUNT]) -> Self {
        Self {
            positions,
            ..Self::default()
        }
    }
}

impl SwitchBank for FakeSwitches {
    fn read(&mut self) -> Result<[Distribution; OUTPUT_COUNT], Error> {
        self.reads += 1;
        if self.fail {
            return Err(Error::SwitchFailure);
        }
        Ok(self.positions)
    }
}

/// GPIO output recording every level it was driven to
#[derive(Debug, Default)]
pub struct FakeOutputPin {
    pub is_high: bool,
    pub history: Vec<bool>,
}

impl digital::ErrorType for FakeOutputPin {
    type Error = Infallible;
}

impl OutputPin for FakeOutputPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.is_high = false;
        self.history.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.is_high = true;
        self.history.push(true);
        Ok(())
    }
}

/// GPIO input with a fixed level
#[derive(Debug, Default)]
pub struct FakeInputPin {
    pub is_high: bool,
}

impl FakeInputPin {
    pub fn new(is_high: bool) -> Self {
        Self { is_high }
    }
}

impl digital::ErrorType for FakeInputPin {
    type Error = Infallible;
}

impl InputPin for FakeInputPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.is_high)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.is_high)
    }
}

/// SPI device recording written frames
#[derive(Debug, Default)]
pub struct FakeSpi {
    pub frames: Vec<Vec<u8>>,
    pub fail: bool,
}

impl spi::ErrorType for FakeSpi {
    type Error = ErrorKind;
}

impl SpiDevice for FakeSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), ErrorKind> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        for operation in operations.iter() {
            if let Operation::Write(bytes) = operation {
                self.frames.push(bytes.to_vec());
            }
        }
        Ok(())
    }
}

/// Delay that returns immediately and remembers what was asked
#[derive(Debug, Default)]
pub struct NoDelay {
    pub total_ns: u64,
}

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
