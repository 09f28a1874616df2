//! Periodogram processing stage
//!
//! One input block of complex samples produces one output block of
//! `blocksize` log-power values. Configuration is an immutable snapshot; staged
//! updates from a [`ConfigHandle`] are swapped in before a cycle starts.

use super::block::{BlockSink, BlockSource, ComplexBlock, PowerBlock};
use crate::config::{ConfigHandle, PeriodogramConfig};
use crate::error::Result;
use crate::spectrum::{log_compress, WelchEstimator, WelchOptions};
use num_complex::Complex32;
use std::sync::Arc;

/// Where the processor is within a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    Idle,
    Configured,
    Processing,
}

/// Welch PSD stage of a streaming pipeline
pub struct Periodogram {
    handle: ConfigHandle,
    config: Arc<PeriodogramConfig>,
    estimator: WelchEstimator,
    state: CycleState,
}

impl Periodogram {
    /// Create a processor from a configuration
    pub fn new(config: PeriodogramConfig) -> Result<Self> {
        let handle = ConfigHandle::new(config)?;
        let config = handle.active();
        let estimator = WelchEstimator::new(WelchOptions::from(config.as_ref()))?;

        Ok(Self {
            handle,
            config,
            estimator,
            state: CycleState::Idle,
        })
    }

    /// Handle for staging parameter updates, possibly from another thread
    pub fn config_handle(&self) -> ConfigHandle {
        self.handle.clone()
    }

    /// Stage a dynamic parameter change for the next cycle
    pub fn set_parameter(&self, name: &str, value: &str) -> Result<()> {
        self.handle.update_parameter(name, value)
    }

    /// Configuration used by the last (or next, if nothing is staged) cycle
    pub fn config(&self) -> &PeriodogramConfig {
        &self.config
    }

    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Compute the log-power spectrum of one input block
    ///
    /// Timestamp and sample rate are copied to the output unchanged. On error
    /// no output is produced and the processor returns to idle.
    pub fn process_block(&mut self, input: &ComplexBlock) -> Result<PowerBlock> {
        self.configure()?;

        self.state = CycleState::Processing;
        let result = self.run(input, None);
        self.state = CycleState::Idle;

        if let Err(e) = &result {
            log::warn!("Periodogram cycle failed: {}", e);
        }
        result
    }

    /// Run one cycle from `source` to `sink`
    ///
    /// # Returns
    /// `false` if the source had no block waiting
    pub fn run_cycle<S, K>(&mut self, source: &mut S, sink: &mut K) -> Result<bool>
    where
        S: BlockSource<Complex32> + ?Sized,
        K: BlockSink<f32> + ?Sized,
    {
        let input = match source.acquire() {
            Some(block) => block,
            None => return Ok(false),
        };

        self.configure()?;

        self.state = CycleState::Processing;
        let output = sink.acquire(self.config.blocksize);
        let result = self.run(&input, Some(output));
        self.state = CycleState::Idle;

        match result {
            Ok(output) => {
                sink.release(output)?;
                Ok(true)
            }
            Err(e) => {
                log::warn!("Periodogram cycle failed: {}", e);
                Err(e)
            }
        }
    }

    /// Swap in any staged configuration
    fn configure(&mut self) -> Result<()> {
        if let Some(snapshot) = self.handle.commit_staged() {
            let options = WelchOptions::from(snapshot.as_ref());
            if options != *self.estimator.options() {
                log::debug!(
                    "Rebuilding estimator: blocksize {} -> {}",
                    self.estimator.segment_len(),
                    options.segment_len
                );
                self.estimator = WelchEstimator::new(options)?;
            }
            self.config = snapshot;
        }
        self.state = CycleState::Configured;
        Ok(())
    }

    fn run(&self, input: &ComplexBlock, output: Option<PowerBlock>) -> Result<PowerBlock> {
        if input.len() != self.config.number_of_complex_samples {
            log::debug!(
                "Input block has {} samples, configured for {}",
                input.len(),
                self.config.number_of_complex_samples
            );
        }

        let interleaved = interleave(&input.data);
        let mut spectrum = self.estimator.estimate(&interleaved)?;
        log_compress(&mut spectrum)?;

        let blocksize = self.config.blocksize;
        let mut output = match output {
            Some(block) if block.len() == blocksize => block,
            _ => PowerBlock::zeroed(blocksize),
        };
        output.data.copy_from_slice(&spectrum);
        output.copy_metadata(input);
        Ok(output)
    }
}

/// Interleave complex samples imaginary part first
///
/// The transform reads each pair as (real, imaginary); loading them swapped
/// and using the positive-exponent kernel together give the conventional
/// power spectrum of the samples.
pub fn interleave(samples: &[Complex32]) -> Vec<f32> {
    samples.iter().flat_map(|s| [s.im, s.re]).collect()
}
