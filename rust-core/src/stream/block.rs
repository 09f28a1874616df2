//! Data blocks and the source/sink interface to the surrounding stream

use crate::error::Result;
use num_complex::Complex32;

/// A block of samples with the metadata that travels alongside it
#[derive(Debug, Clone, PartialEq)]
pub struct DataBlock<T> {
    pub data: Vec<T>,

    /// Timestamp of the first sample, in seconds
    pub timestamp: f64,

    /// Sample rate in Hz
    pub sample_rate: f64,
}

/// Complex input samples
pub type ComplexBlock = DataBlock<Complex32>;

/// Real output values (log power)
pub type PowerBlock = DataBlock<f32>;

impl<T> DataBlock<T> {
    pub fn new(data: Vec<T>, timestamp: f64, sample_rate: f64) -> Self {
        Self {
            data,
            timestamp,
            sample_rate,
        }
    }

    /// Copy timestamp and sample rate from another block
    pub fn copy_metadata<U>(&mut self, other: &DataBlock<U>) {
        self.timestamp = other.timestamp;
        self.sample_rate = other.sample_rate;
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Clone + Default> DataBlock<T> {
    /// Block of `len` default values with zeroed metadata
    pub fn zeroed(len: usize) -> Self {
        Self::new(vec![T::default(); len], 0.0, 0.0)
    }
}

/// Where input blocks come from
pub trait BlockSource<T> {
    /// Next available block, or `None` if nothing is waiting
    fn acquire(&mut self) -> Option<DataBlock<T>>;
}

/// Where output blocks go
pub trait BlockSink<T: Clone + Default> {
    /// Pre-allocate an output block of exactly `len` values
    fn acquire(&mut self, len: usize) -> DataBlock<T> {
        DataBlock::zeroed(len)
    }

    /// Hand a filled block back to the stream
    fn release(&mut self, block: DataBlock<T>) -> Result<()>;
}

impl<T> BlockSource<T> for std::collections::VecDeque<DataBlock<T>> {
    fn acquire(&mut self) -> Option<DataBlock<T>> {
        self.pop_front()
    }
}

impl<T: Clone + Default> BlockSink<T> for Vec<DataBlock<T>> {
    fn release(&mut self, block: DataBlock<T>) -> Result<()> {
        self.push(block);
        Ok(())
    }
}
