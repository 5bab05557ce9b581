//! Pre-drawn random sample pools
//!
//! Two small fixed pools (uniform, normal) are refilled to capacity after
//! every trigger so a gate never waits on the RNG before its voltage is set.

#[cfg(feature = "defmt")]
use defmt::warn;

use crate::error::{Error, keep_first};
use crate::generator::{EntropySource, Generator};
use crate::output::{Distribution, Output};
use crate::selector::DistributionSelector;

/// Samples held per pool
pub const POOL_CAPACITY: usize = 4;

/// Fixed-capacity stack of samples.
///
/// `len` is both the number of valid samples and the slot the next fill
/// writes to; draws read from `len - 1`.
#[derive(Debug, Clone)]
pub struct SamplePool {
    samples: [u16; POOL_CAPACITY],
    len: usize,
}

impl SamplePool {
    /// Create an exhausted pool
    pub const fn new() -> Self {
        Self {
            samples: [0; POOL_CAPACITY],
            len: 0,
        }
    }

    /// Number of samples available to draw
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_exhausted(&self) -> bool {
        self.len == 0
    }

    pub const fn is_full(&self) -> bool {
        self.len == POOL_CAPACITY
    }

    /// Top the pool up to capacity.
    ///
    /// A failed draw stores 0 and still advances, so the pool always ends up
    /// full. The first failure is returned.
    pub fn fill_with<F>(&mut self, mut draw: F) -> Result<(), Error>
    where
        F: FnMut() -> Result<u16, Error>,
    {
        let mut result = Ok(());
        while self.len < POOL_CAPACITY {
            let sample = draw().unwrap_or_else(|error| {
                keep_first(&mut result, Err(error));
                0
            });
            self.samples[self.len] = sample;
            self.len += 1;
        }
        result
    }

    /// Consume the most recent sample
    ///
    /// Returns None if the pool is exhausted
    pub fn draw(&mut self) -> Option<u16> {
        let index = self.len.checked_sub(1)?;
        self.len = index;
        Some(self.samples[index])
    }

    /// Re-expose the last `count` consumed samples.
    ///
    /// Rolling back past capacity is a logic error and panics.
    pub fn rollback(&mut self, count: usize) {
        assert!(
            self.len + count <= POOL_CAPACITY,
            "rollback of {} past pool capacity (len {})",
            count,
            self.len
        );
        self.len += count;
    }

    /// Samples currently available, oldest first
    pub fn available(&self) -> &[u16] {
        &self.samples[..self.len]
    }
}

impl Default for SamplePool {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner of the uniform and the normal sample pool
#[derive(Debug, Clone, Default)]
pub struct SampleBuffers {
    uniform: SamplePool,
    normal: SamplePool,
}

impl SampleBuffers {
    /// Create both pools exhausted; call [`fill`](Self::fill) before drawing
    pub const fn new() -> Self {
        Self {
            uniform: SamplePool::new(),
            normal: SamplePool::new(),
        }
    }

    /// Refill both pools to capacity.
    ///
    /// Both pools are always full on return, even when the generator failed.
    pub fn fill<R: EntropySource>(&mut self, generator: &mut Generator<R>) -> Result<(), Error> {
        let mut result = self.uniform.fill_with(|| generator.uniform_sample());
        keep_first(&mut result, self.normal.fill_with(|| generator.normal_sample()));

        #[cfg(feature = "defmt")]
        if let Err(error) = result {
            warn!("[SampleBuffers.fill] refilled with placeholders: {}", error);
        }

        result
    }

    /// Consume one sample of the given distribution
    ///
    /// Returns None if that pool is exhausted
    pub fn draw(&mut self, distribution: Distribution) -> Option<u16> {
        self.pool_mut(distribution).draw()
    }

    /// Consume one sample for `output` using its selected distribution
    pub fn draw_for(&mut self, output: Output, selector: &DistributionSelector) -> Option<u16> {
        self.draw(selector.get(output))
    }

    /// Re-expose consumed samples in each pool
    pub fn rollback(&mut self, uniform: usize, normal: usize) {
        self.uniform.rollback(uniform);
        self.normal.rollback(normal);
    }

    pub const fn pool(&self, distribution: Distribution) -> &SamplePool {
        match distribution {
            Distribution::Uniform => &self.uniform,
            Distribution::Normal => &self.normal,
        }
    }

    pub const fn uniform(&self) -> &SamplePool {
        &self.uniform
    }

    pub const fn normal(&self) -> &SamplePool {
        &self.normal
    }

    const fn pool_mut(&mut self, distribution: Distribution) -> &mut SamplePool {
        match distribution {
            Distribution::Uniform => &mut self.uniform,
            Distribution::Normal => &mut self.normal,
        }
    }
}
