//! Telemetry record assembly for one sampling cycle

pub mod payload;
pub mod topic;

pub use payload::{build_payload, to_json};
pub use topic::format_topic;

use log::warn;

use crate::conversion::{adc_average, ldr_percentage, ntc_temperature};
use crate::errors::ConversionResult;
use crate::models::{CalibrationConstants, DhtReading, RawSample, TelemetryRecord};
use crate::utils::{is_plausible_temperature, round_decimals};

/// Raw inputs gathered during one cycle
#[derive(Debug, Clone, Default)]
pub struct CycleReadings {
    pub ntc_samples: Vec<RawSample>,
    pub ldr_samples: Vec<RawSample>,
    pub dht: Option<DhtReading>,
}

/// Convert the raw readings of a cycle into a telemetry record
///
/// Fails when either batch is empty or the thermistor reading sits on an ADC
/// bound; no partial record is produced in that case. The thermistor
/// temperature and light level are rounded to two decimals.
pub fn assemble_record(
    timestamp: String,
    user: &str,
    device: &str,
    cal: &CalibrationConstants,
    readings: &CycleReadings,
) -> ConversionResult<TelemetryRecord> {
    let ntc_raw = adc_average(&readings.ntc_samples)?;
    let ntc_temp = ntc_temperature(ntc_raw, cal)?;
    if !is_plausible_temperature(ntc_temp) {
        warn!(
            "Thermistor temperature {:.1}°C (ADC={:.1}) outside plausible range, check calibration or wiring",
            ntc_temp, ntc_raw
        );
    }

    let ldr_raw = adc_average(&readings.ldr_samples)?;
    let luminosity = ldr_percentage(ldr_raw, cal);

    Ok(build_payload(
        timestamp,
        user,
        device,
        readings.dht.map(|d| d.temperature),
        readings.dht.map(|d| d.humidity),
        round_decimals(ntc_temp, 2),
        round_decimals(luminosity, 2),
    ))
}
