//! Sample-by-sample Goertzel detection over fixed-length blocks.
//!
//! Useful when samples arrive one at a time (an ADC interrupt, an audio
//! callback) and a power reading is wanted every `block_len` samples.

use crate::error::GoertzelError;
use crate::goertzel::{to_dbm, validate, GoertzelFilter};
use crate::num::Float;

/// Emits the tone power once per completed block and starts over.
#[derive(Debug, Clone, PartialEq)]
pub struct GoertzelBlock<T: Float> {
    filter: GoertzelFilter<T>,
    block_len: usize,
}

impl<T: Float> GoertzelBlock<T> {
    /// Create a detector for `frequency` producing one reading per
    /// `block_len` samples.
    ///
    /// A `block_len` of zero is treated as one; see [`try_new`](Self::try_new)
    /// for the checked constructor.
    pub fn new(frequency: T, sampling_frequency: T, block_len: usize) -> Self {
        Self {
            filter: GoertzelFilter::new(frequency, sampling_frequency),
            block_len: block_len.max(1),
        }
    }

    /// # Errors
    /// Same parameter checks as [`GoertzelFilter::try_new`], plus
    /// [`GoertzelError::EmptyBlock`] when `block_len` is zero.
    pub fn try_new(
        frequency: T,
        sampling_frequency: T,
        block_len: usize,
    ) -> Result<Self, GoertzelError> {
        validate(frequency, sampling_frequency)?;
        if block_len == 0 {
            return Err(GoertzelError::EmptyBlock);
        }
        Ok(Self::new(frequency, sampling_frequency, block_len))
    }

    pub fn block_len(&self) -> usize {
        self.block_len
    }

    /// Samples accumulated in the current, unfinished block.
    pub fn pending(&self) -> usize {
        self.filter.sample_count()
    }

    pub fn filter(&self) -> &GoertzelFilter<T> {
        &self.filter
    }

    /// Feed one sample. Returns the block's power when this sample completes
    /// it, after which the detector is ready for the next block.
    pub fn push(&mut self, sample: T) -> Option<T> {
        self.filter.push(sample);
        if self.filter.sample_count() < self.block_len {
            return None;
        }
        let power = self.filter.power();
        vlog!(
            trace,
            "goertzel block f={:?} complete: power={:?}",
            self.filter.frequency(),
            power
        );
        self.filter.reset();
        Some(power)
    }

    /// [`push`](Self::push) reporting the level in dBm.
    pub fn push_dbm(&mut self, sample: T) -> Option<T> {
        self.push(sample).map(to_dbm)
    }

    /// Drop a partially accumulated block.
    pub fn reset(&mut self) {
        self.filter.reset();
    }
}
