use crate::output::{Distribution, OUTPUT_COUNT, Output};

/// Distribution choice of each output, as set by the front panel switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistributionSelector {
    assignments: [Distribution; OUTPUT_COUNT],
}

impl DistributionSelector {
    /// All outputs start uniform
    pub const fn new() -> Self {
        Self {
            assignments: [Distribution::Uniform; OUTPUT_COUNT],
        }
    }

    pub const fn set(&mut self, output: Output, distribution: Distribution) {
        self.assignments[output.index()] = distribution;
    }

    pub const fn get(&self, output: Output) -> Distribution {
        self.assignments[output.index()]
    }

    /// Replace all four assignments, in panel order
    pub fn set_all(&mut self, assignments: [Distribution; OUTPUT_COUNT]) {
        for (output, distribution) in Output::ALL.into_iter().zip(assignments) {
            self.set(output, distribution);
        }
    }

    pub const fn assignments(&self) -> [Distribution; OUTPUT_COUNT] {
        self.assignments
    }
}
