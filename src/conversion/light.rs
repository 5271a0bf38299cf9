/// LDR model: linear share of the ADC full scale
use crate::models::CalibrationConstants;

/// Light level in percent for an averaged raw LDR reading
///
/// Maps `[0, ADC_MAX]` onto `[0, 100]`, with both ends exact.
pub fn ldr_percentage(raw: f64, cal: &CalibrationConstants) -> f64 {
    (raw * 100.0 / f64::from(cal.adc_max)).clamp(0.0, 100.0)
}
