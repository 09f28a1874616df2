//! Fan-out of one block stream to several outputs

use super::block::{BlockSink, DataBlock};
use crate::error::{PeriodogramError, Result};

/// Largest number of outputs a splitter accepts
pub const MAX_OUTPUTS: usize = 10;

/// Copies every input block, data and metadata, to each of its outputs
pub struct Splitter<T: Clone + Default> {
    outputs: Vec<Box<dyn BlockSink<T> + Send>>,
}

impl<T: Clone + Default> Splitter<T> {
    /// Create splitter over 1 to [`MAX_OUTPUTS`] sinks
    pub fn new(outputs: Vec<Box<dyn BlockSink<T> + Send>>) -> Result<Self> {
        if outputs.is_empty() || outputs.len() > MAX_OUTPUTS {
            return Err(PeriodogramError::InvalidConfiguration(format!(
                "splitter needs 1 to {} outputs, got {}",
                MAX_OUTPUTS,
                outputs.len()
            )));
        }

        Ok(Self { outputs })
    }

    /// Write a copy of `block` to every output
    ///
    /// Every output is attempted even if an earlier one fails; the first
    /// error is returned.
    pub fn push(&mut self, block: &DataBlock<T>) -> Result<()> {
        let mut first_error = None;

        for (index, output) in self.outputs.iter_mut().enumerate() {
            let mut copy = output.acquire(block.len());
            copy.data.clear();
            copy.data.extend_from_slice(&block.data);
            copy.copy_metadata(block);

            if let Err(e) = output.release(copy) {
                log::warn!("Splitter output {} rejected block: {}", index, e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }
}
