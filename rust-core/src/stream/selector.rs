//! Sample range extraction

use super::block::DataBlock;
use crate::error::{PeriodogramError, Result};

/// Copy `total` samples starting at `offset` into a new block
///
/// Metadata is carried over unchanged.
pub fn select_samples<T: Clone>(
    block: &DataBlock<T>,
    offset: usize,
    total: usize,
) -> Result<DataBlock<T>> {
    let end = offset
        .checked_add(total)
        .filter(|&end| end <= block.len())
        .ok_or_else(|| {
            log::debug!(
                "Not enough samples: {} requested from offset {}, block has {}",
                total,
                offset,
                block.len()
            );
            PeriodogramError::InsufficientSamples {
                available: block.len(),
                required: offset.saturating_add(total),
            }
        })?;

    Ok(DataBlock::new(
        block.data[offset..end].to_vec(),
        block.timestamp,
        block.sample_rate,
    ))
}
