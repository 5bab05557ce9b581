//! Gate trigger sequence
//!
//! Gate 1 updates outputs 1-3, gate 2 updates output 4. All voltages go out
//! before any LED so the audible output is not delayed by the LED updates.
//! Each LED shows the same sample as its output: the pools are rolled back
//! by exactly what the voltage pass consumed and drawn again in the same
//! order.

use heapless::Vec;

use crate::buffer::SampleBuffers;
use crate::error::{Error, keep_first};
use crate::generator::{EntropySource, Generator};
use crate::output::{Distribution, OUTPUT_COUNT, Output};
use crate::selector::DistributionSelector;
use crate::transmitter::Transmitter;

/// Outputs driven by gate 1
const GATE_1_OUTPUTS: [Output; 3] = [Output::Output1, Output::Output2, Output::Output3];

/// Outputs driven by gate 2
const GATE_2_OUTPUTS: [Output; 1] = [Output::Output4];

/// Gates that fired since the last pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GateSet {
    pub gate1: bool,
    pub gate2: bool,
}

impl GateSet {
    pub const fn new(gate1: bool, gate2: bool) -> Self {
        Self { gate1, gate2 }
    }

    pub const fn any(self) -> bool {
        self.gate1 || self.gate2
    }

    /// Gates fired in either set
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            gate1: self.gate1 || other.gate1,
            gate2: self.gate2 || other.gate2,
        }
    }

    /// Outputs to update, in transfer order
    pub fn outputs(self) -> Vec<Output, OUTPUT_COUNT> {
        // Both gate groups together are exactly `OUTPUT_COUNT` outputs.
        let mut outputs = Vec::new();
        if self.gate1 {
            outputs.extend(GATE_1_OUTPUTS);
        }
        if self.gate2 {
            outputs.extend(GATE_2_OUTPUTS);
        }
        outputs
    }
}

/// Samples taken from each pool during a pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Consumed {
    pub uniform: usize,
    pub normal: usize,
}

impl Consumed {
    const fn count(&mut self, distribution: Distribution) {
        match distribution {
            Distribution::Uniform => self.uniform += 1,
            Distribution::Normal => self.normal += 1,
        }
    }
}

/// Draw and transmit a voltage for every output.
///
/// Keeps going after a failed transfer. Returns what was consumed from the
/// pools together with the first error.
pub fn set_voltages<T: Transmitter>(
    outputs: &[Output],
    buffers: &mut SampleBuffers,
    selector: &DistributionSelector,
    transmitter: &mut T,
) -> (Consumed, Result<(), Error>) {
    let mut consumed = Consumed::default();
    let mut result = Ok(());
    for &output in outputs {
        let distribution = selector.get(output);
        let Some(value) = buffers.draw(distribution) else {
            keep_first(&mut result, Err(Error::BufferUnderrun));
            continue;
        };
        consumed.count(distribution);
        keep_first(&mut result, transmitter.set_voltage(output, value));
    }
    (consumed, result)
}

/// Redraw the samples behind each output and show them on the paired LEDs
pub fn set_leds<T: Transmitter>(
    outputs: &[Output],
    buffers: &mut SampleBuffers,
    selector: &DistributionSelector,
    transmitter: &mut T,
) -> Result<(), Error> {
    let mut result = Ok(());
    for &output in outputs {
        let Some(value) = buffers.draw_for(output, selector) else {
            keep_first(&mut result, Err(Error::BufferUnderrun));
            continue;
        };
        keep_first(&mut result, transmitter.set_led_brightness(output.led(), value));
    }
    result
}

/// Run the full trigger sequence for the fired gates.
///
/// Voltages, rollback, LEDs, then a refill of both pools. Every step runs
/// even if an earlier one failed; the first error is returned.
pub fn fire<T, R>(
    gates: GateSet,
    buffers: &mut SampleBuffers,
    selector: &DistributionSelector,
    transmitter: &mut T,
    generator: &mut Generator<R>,
) -> Result<(), Error>
where
    T: Transmitter,
    R: EntropySource,
{
    let outputs = gates.outputs();

    let (consumed, mut result) = set_voltages(&outputs, buffers, selector, transmitter);
    buffers.rollback(consumed.uniform, consumed.normal);
    keep_first(&mut result, set_leds(&outputs, buffers, selector, transmitter));
    keep_first(&mut result, buffers.fill(generator));

    result
}
