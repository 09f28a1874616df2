//! Serial-to-block reshaping
//!
//! Concatenates a fixed number of equally sized input blocks into one larger
//! block, e.g. to feed the periodogram with more samples per cycle than the
//! upstream stage produces.

use super::block::DataBlock;
use crate::error::{PeriodogramError, Result};

/// Collects `factor` blocks of `input_block_size` into one output block
pub struct BlockAssembler<T> {
    factor: usize,
    input_block_size: usize,
    pending: Vec<T>,
    collected: usize,
}

impl<T: Clone> BlockAssembler<T> {
    pub fn new(factor: usize, input_block_size: usize) -> Result<Self> {
        if factor == 0 || input_block_size == 0 {
            return Err(PeriodogramError::InvalidConfiguration(format!(
                "assembler needs a positive factor and block size, got {} x {}",
                factor, input_block_size
            )));
        }

        Ok(Self {
            factor,
            input_block_size,
            pending: Vec::with_capacity(factor * input_block_size),
            collected: 0,
        })
    }

    /// Add one input block
    ///
    /// # Returns
    /// The assembled block once `factor` blocks have been collected. It
    /// carries the metadata of the last contributing block.
    pub fn push(&mut self, block: &DataBlock<T>) -> Result<Option<DataBlock<T>>> {
        if block.len() != self.input_block_size {
            return Err(PeriodogramError::BlockLength {
                expected: self.input_block_size,
                actual: block.len(),
            });
        }

        self.pending.extend_from_slice(&block.data);
        self.collected += 1;

        if self.collected < self.factor {
            return Ok(None);
        }

        self.collected = 0;
        let capacity = self.output_block_size();
        let data = std::mem::replace(&mut self.pending, Vec::with_capacity(capacity));
        Ok(Some(DataBlock::new(data, block.timestamp, block.sample_rate)))
    }

    /// Drop any partially collected output
    pub fn reset(&mut self) {
        self.pending.clear();
        self.collected = 0;
    }

    pub fn output_block_size(&self) -> usize {
        self.factor * self.input_block_size
    }

    /// Number of input blocks currently held
    pub fn collected(&self) -> usize {
        self.collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assembles_after_factor_blocks() {
        let mut assembler = BlockAssembler::new(3, 2).unwrap();

        assert!(assembler.push(&DataBlock::new(vec![1, 2], 0.0, 10.0)).unwrap().is_none());
        assert!(assembler.push(&DataBlock::new(vec![3, 4], 0.2, 10.0)).unwrap().is_none());
        let out = assembler
            .push(&DataBlock::new(vec![5, 6], 0.4, 10.0))
            .unwrap()
            .unwrap();

        assert_eq!(out.data, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(out.timestamp, 0.4);
        assert_eq!(assembler.collected(), 0);

        // Starts over
        assert!(assembler.push(&DataBlock::new(vec![7, 8], 0.6, 10.0)).unwrap().is_none());
    }

    #[test]
    fn test_consecutive_outputs() {
        let mut assembler = BlockAssembler::new(2, 2).unwrap();
        let mut outputs = Vec::new();

        for i in 0..6 {
            let block = DataBlock::new(vec![2 * i, 2 * i + 1], i as f64, 4.0);
            if let Some(out) = assembler.push(&block).unwrap() {
                outputs.push(out);
            }
        }

        assert_eq!(outputs.len(), 3);
        assert_eq!(outputs[0].data, vec![0, 1, 2, 3]);
        assert_eq!(outputs[1].data, vec![4, 5, 6, 7]);
        assert_eq!(outputs[2].data, vec![8, 9, 10, 11]);
        assert_eq!(outputs[2].timestamp, 5.0);
    }

    #[test]
    fn test_factor_one_passes_through() {
        let mut assembler = BlockAssembler::new(1, 3).unwrap();
        let out = assembler.push(&DataBlock::new(vec![1.0, 2.0, 3.0], 1.0, 2.0)).unwrap();
        assert_eq!(out.unwrap().data, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_rejects_wrong_block_size() {
        let mut assembler = BlockAssembler::new(2, 4).unwrap();
        assert_eq!(
            assembler.push(&DataBlock::new(vec![0u8; 3], 0.0, 1.0)),
            Err(PeriodogramError::BlockLength { expected: 4, actual: 3 })
        );
        assert!(BlockAssembler::<u8>::new(0, 4).is_err());
    }

    #[test]
    fn test_reset_discards_partial() {
        let mut assembler = BlockAssembler::new(2, 1).unwrap();
        assembler.push(&DataBlock::new(vec![9], 0.0, 1.0)).unwrap();
        assembler.reset();
        assert!(assembler.push(&DataBlock::new(vec![1], 0.0, 1.0)).unwrap().is_none());
        let out = assembler.push(&DataBlock::new(vec![2], 0.0, 1.0)).unwrap().unwrap();
        assert_eq!(out.data, vec![1, 2]);
    }
}
