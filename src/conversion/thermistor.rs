//! NTC thermistor model: divider resistance and Beta equation
//!
//! The thermistor sits on the ADC side of a voltage divider whose other leg is
//! the series resistor, so the raw reading grows with the thermistor
//! resistance and therefore falls as the temperature rises.

use crate::errors::{ConversionError, ConversionResult};
use crate::models::CalibrationConstants;

/// Offset between the Celsius and Kelvin scales
pub const KELVIN_OFFSET: f64 = 273.15;

/// Resistance of the thermistor for an averaged raw reading
///
/// `R = R_SERIES * x / (ADC_MAX - x)`
///
/// # Errors
/// `ConversionError::OutOfRange` when `raw` is not strictly inside
/// `(0, ADC_MAX)`: zero is a shorted thermistor, full scale an open one.
pub fn ntc_resistance(raw: f64, cal: &CalibrationConstants) -> ConversionResult<f64> {
    let adc_max = f64::from(cal.adc_max);

    if raw.is_nan() || raw <= 0.0 || raw >= adc_max {
        return Err(ConversionError::OutOfRange {
            value: raw,
            adc_max: cal.adc_max,
        });
    }

    Ok(cal.r_series * raw / (adc_max - raw))
}

/// Temperature in Celsius for a thermistor resistance, via the Beta equation
///
/// `1/T = 1/T0 + ln(R / R0) / B`, all temperatures in kelvin. At `R == R0`
/// the logarithm vanishes and the nominal temperature comes back unchanged.
///
/// The equation only holds while `1/T` stays positive, i.e. for
/// `R > R0 * exp(-B / T0)`. With the module constants that is a raw average
/// above roughly 1.3e-3, which any batch of at most
/// `config::MAX_SAMPLES_PER_READ` samples satisfies once it is non-zero.
pub fn resistance_to_celsius(resistance: f64, cal: &CalibrationConstants) -> f64 {
    let t_nominal_k = cal.t_nominal + KELVIN_OFFSET;
    let inv_t = 1.0 / t_nominal_k + (resistance / cal.r_nominal).ln() / cal.b_coeff;
    1.0 / inv_t - KELVIN_OFFSET
}

/// Temperature in Celsius for an averaged raw thermistor reading
///
/// No plausibility band is enforced; see `utils::is_plausible_temperature`.
pub fn ntc_temperature(raw: f64, cal: &CalibrationConstants) -> ConversionResult<f64> {
    let resistance = ntc_resistance(raw, cal)?;
    Ok(resistance_to_celsius(resistance, cal))
}
