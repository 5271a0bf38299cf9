use serde::{Deserialize, Serialize};

/// Raw analog-to-digital converter reading
pub type RawSample = u16;

/// Calibration of the thermistor voltage divider and the ADC it is wired to
///
/// Built once at startup and shared by reference; nothing mutates it afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationConstants {
    /// Series resistor of the divider, in ohms
    pub r_series: f64,
    /// Beta coefficient of the thermistor, in kelvin
    pub b_coeff: f64,
    /// Thermistor resistance at the nominal temperature, in ohms
    pub r_nominal: f64,
    /// Nominal temperature, in degrees Celsius
    pub t_nominal: f64,
    /// Full-scale ADC reading (4095 for a 12-bit converter)
    pub adc_max: RawSample,
}

impl CalibrationConstants {
    /// Constants of the stock NTC module on a 12-bit ADC
    pub const MODULE_DEFAULT: Self = Self {
        r_series: 10_000.0,
        b_coeff: 3950.0,
        r_nominal: 1760.0,
        t_nominal: 25.0,
        adc_max: 4095,
    };
}

impl Default for CalibrationConstants {
    fn default() -> Self {
        Self::MODULE_DEFAULT
    }
}

/// Temperature and humidity reported by the DHT11 secondary sensor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DhtReading {
    pub temperature: f64,
    pub humidity: f64,
}

/// One telemetry record, built once per cycle and serialized for publishing.
///
/// Field order is the serialized order. Absent DHT values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub timestamp: String,
    pub user: String,
    pub device: String,
    pub dht_temperature: Option<f64>,
    pub dht_humidity: Option<f64>,
    pub ntc_temperature: f64,
    pub luminosity: f64,
}
