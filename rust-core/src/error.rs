//! Error types for the periodogram pipeline

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PeriodogramError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Insufficient samples: {available} available, at least {required} required")]
    InsufficientSamples { available: usize, required: usize },

    #[error("Non-finite power value {value} at bin {index}")]
    NumericAnomaly { index: usize, value: f32 },

    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("Invalid value {value:?} for parameter {name}")]
    InvalidParameterValue { name: String, value: String },

    #[error("Parameter {0} is not dynamic and cannot be changed after construction")]
    StaticParameter(String),

    #[error("Block length mismatch: expected {expected}, got {actual}")]
    BlockLength { expected: usize, actual: usize },

    #[error("Block buffer is full")]
    BufferFull,
}

pub type Result<T> = std::result::Result<T, PeriodogramError>;
