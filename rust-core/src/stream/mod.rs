//! Streaming plumbing around the estimator

pub mod block;
pub mod buffer;
pub mod assembler;
pub mod selector;
pub mod splitter;
pub mod processor;

pub use block::{BlockSink, BlockSource, ComplexBlock, DataBlock, PowerBlock};
pub use buffer::{BlockConsumer, BlockProducer, BlockRingBuffer};
pub use assembler::BlockAssembler;
pub use selector::select_samples;
pub use splitter::Splitter;
pub use processor::{CycleState, Periodogram};
