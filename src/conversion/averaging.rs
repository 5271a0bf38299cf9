/// Reduction of a sample batch to one representative reading
use crate::errors::{ConversionError, ConversionResult};
use crate::models::RawSample;

/// Arithmetic mean of a batch of ADC samples
///
/// Smooths the noise of the converter over a short burst of reads. Individual
/// samples are not bounds-checked here: the thermistor and light models accept
/// different ranges and check their own input.
///
/// # Errors
/// `ConversionError::InvalidInput` when `samples` is empty
pub fn adc_average(samples: &[RawSample]) -> ConversionResult<f64> {
    if samples.is_empty() {
        return Err(ConversionError::InvalidInput);
    }

    let sum: u64 = samples.iter().map(|&s| u64::from(s)).sum();
    Ok(sum as f64 / samples.len() as f64)
}
