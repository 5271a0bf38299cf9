//! Conversion errors raised by the sensor models
//!
//! Both kinds are local to a single computation and never retried here. An
//! empty batch means the cycle must be skipped or resampled; an out-of-range
//! thermistor reading means the divider is open or shorted.

use thiserror::Error;

use crate::models::RawSample;

/// Result type for sensor conversions
pub type ConversionResult<T> = Result<T, ConversionError>;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConversionError {
    /// No samples were collected for the batch
    #[error("Invalid input: sample batch is empty")]
    InvalidInput,

    /// Reading at or beyond the ADC bounds of the divider equation
    #[error("ADC reading {value} outside open range (0, {adc_max})")]
    OutOfRange {
        /// The averaged reading that was rejected
        value: f64,
        /// Full-scale ADC value in use
        adc_max: RawSample,
    },
}
