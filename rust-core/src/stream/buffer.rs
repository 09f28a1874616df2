//! Lock-free ring buffer of data blocks
//!
//! Single-producer single-consumer queue for passing blocks between
//! pipeline stages running on different threads.

use super::block::{BlockSink, BlockSource, DataBlock};
use crate::error::{PeriodogramError, Result};
use ringbuf::{HeapConsumer, HeapProducer, HeapRb};

/// Bounded block queue
pub struct BlockRingBuffer<T> {
    producer: HeapProducer<DataBlock<T>>,
    consumer: HeapConsumer<DataBlock<T>>,
    capacity: usize,
}

impl<T> BlockRingBuffer<T> {
    /// Create new ring buffer holding up to `capacity` blocks
    pub fn new(capacity: usize) -> Self {
        let rb = HeapRb::<DataBlock<T>>::new(capacity);
        let (producer, consumer) = rb.split();

        Self {
            producer,
            consumer,
            capacity,
        }
    }

    /// Split into producer and consumer ends
    pub fn split(self) -> (BlockProducer<T>, BlockConsumer<T>) {
        (
            BlockProducer {
                producer: self.producer,
                capacity: self.capacity,
            },
            BlockConsumer {
                consumer: self.consumer,
                capacity: self.capacity,
            },
        )
    }

    /// Get buffer capacity in blocks
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Producer end of a block ring buffer
pub struct BlockProducer<T> {
    producer: HeapProducer<DataBlock<T>>,
    capacity: usize,
}

impl<T> BlockProducer<T> {
    /// Push a block, handing it back if the buffer is full
    pub fn push(&mut self, block: DataBlock<T>) -> std::result::Result<(), DataBlock<T>> {
        self.producer.push(block)
    }

    /// Get number of free block slots
    pub fn free_len(&self) -> usize {
        self.producer.free_len()
    }

    pub fn is_full(&self) -> bool {
        self.producer.is_full()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Clone + Default> BlockSink<T> for BlockProducer<T> {
    fn release(&mut self, block: DataBlock<T>) -> Result<()> {
        self.push(block).map_err(|dropped| {
            log::warn!("Block buffer full, dropping block of {} values", dropped.len());
            PeriodogramError::BufferFull
        })
    }
}

/// Consumer end of a block ring buffer
pub struct BlockConsumer<T> {
    consumer: HeapConsumer<DataBlock<T>>,
    capacity: usize,
}

impl<T> BlockConsumer<T> {
    /// Pop the oldest block
    pub fn pop(&mut self) -> Option<DataBlock<T>> {
        self.consumer.pop()
    }

    /// Get number of queued blocks
    pub fn len(&self) -> usize {
        self.consumer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> BlockSource<T> for BlockConsumer<T> {
    fn acquire(&mut self) -> Option<DataBlock<T>> {
        self.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_push_pop() {
        let rb = BlockRingBuffer::<f32>::new(4);
        let (mut producer, mut consumer) = rb.split();

        producer.push(DataBlock::new(vec![1.0, 2.0], 0.5, 8000.0)).unwrap();
        producer.push(DataBlock::new(vec![3.0], 1.0, 8000.0)).unwrap();
        assert_eq!(consumer.len(), 2);

        let first = consumer.pop().unwrap();
        assert_eq!(first.data, vec![1.0, 2.0]);
        assert_eq!(first.timestamp, 0.5);
        assert_eq!(consumer.pop().unwrap().data, vec![3.0]);
        assert!(consumer.is_empty());
    }

    #[test]
    fn test_ring_buffer_overflow() {
        let rb = BlockRingBuffer::<f32>::new(2);
        let (mut producer, _consumer) = rb.split();

        producer.release(DataBlock::zeroed(1)).unwrap();
        producer.release(DataBlock::zeroed(1)).unwrap();
        assert!(producer.is_full());
        assert_eq!(
            producer.release(DataBlock::zeroed(1)),
            Err(PeriodogramError::BufferFull)
        );
    }

    #[test]
    fn test_ring_buffer_underflow() {
        let rb = BlockRingBuffer::<f32>::new(8);
        let (_producer, mut consumer) = rb.split();
        assert!(consumer.acquire().is_none());
    }
}
