use log::{debug, info};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tokio::time::Duration;

use crate::models::CalibrationConstants;

/// Largest batch per read. Keeps the smallest non-zero thermistor average
/// (`1 / SAMPLES_PER_READ`) inside the domain where the Beta equation holds.
pub const MAX_SAMPLES_PER_READ: usize = 256;

/// Sysfs files of the DHT11 secondary sensor
#[derive(Debug, Clone, PartialEq)]
pub struct DhtPaths {
    pub temperature: PathBuf,
    pub humidity: PathBuf,
}

#[derive(Debug, Clone)]
pub struct StationConfig {
    pub user: String,
    pub device: String,
    pub calibration: CalibrationConstants,
    pub ntc_adc_path: PathBuf,
    pub ldr_adc_path: PathBuf,
    pub dht: Option<DhtPaths>,
    pub samples_per_read: usize,
    pub sample_delay: Duration,
    pub read_interval: Duration,
    pub warmup: Duration,
}

impl StationConfig {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        // Load environment variables
        dotenv::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from a variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, Box<dyn std::error::Error>> {
            match lookup(key) {
                Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
                _ => Err(format!("{} environment variable not set", key).into()),
            }
        };

        let user = required("STATION_USER")?;
        let device = required("STATION_DEVICE")?;
        let ntc_adc_path = PathBuf::from(required("NTC_ADC_PATH")?);
        let ldr_adc_path = PathBuf::from(required("LDR_ADC_PATH")?);

        let defaults = CalibrationConstants::default();
        let calibration = CalibrationConstants {
            r_series: parse_or(&lookup, "NTC_R_SERIES", defaults.r_series)?,
            b_coeff: parse_or(&lookup, "NTC_B_COEFF", defaults.b_coeff)?,
            r_nominal: parse_or(&lookup, "NTC_R_NOMINAL", defaults.r_nominal)?,
            t_nominal: parse_or(&lookup, "NTC_T_NOMINAL", defaults.t_nominal)?,
            adc_max: parse_or(&lookup, "ADC_MAX", defaults.adc_max)?,
        };
        validate_calibration(&calibration)?;

        let dht = match (lookup("DHT_TEMPERATURE_PATH"), lookup("DHT_HUMIDITY_PATH")) {
            (Some(temperature), Some(humidity)) => Some(DhtPaths {
                temperature: PathBuf::from(temperature.trim()),
                humidity: PathBuf::from(humidity.trim()),
            }),
            _ => {
                info!("DHT11 paths not configured, secondary readings will be null");
                None
            }
        };

        let samples_per_read: usize = parse_or(&lookup, "SAMPLES_PER_READ", 20)?;
        if samples_per_read == 0 || samples_per_read > MAX_SAMPLES_PER_READ {
            return Err(format!(
                "SAMPLES_PER_READ must be between 1 and {}, got {}",
                MAX_SAMPLES_PER_READ, samples_per_read
            )
            .into());
        }

        let config = StationConfig {
            user,
            device,
            calibration,
            ntc_adc_path,
            ldr_adc_path,
            dht,
            samples_per_read,
            sample_delay: Duration::from_millis(parse_or(&lookup, "SAMPLE_DELAY_MS", 5)?),
            read_interval: Duration::from_secs(parse_or(&lookup, "READ_INTERVAL_SECS", 10)?),
            warmup: Duration::from_secs(parse_or(&lookup, "WARMUP_SECS", 2)?),
        };

        if config.read_interval.is_zero() {
            return Err("READ_INTERVAL_SECS must be at least 1".into());
        }

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}

/// Parse an optional variable, falling back to `default` when unset
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, Box<dyn std::error::Error>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(format!("Invalid value {:?} for {}: {}", value, key, e).into()),
        },
        _ => Ok(default),
    }
}

fn validate_calibration(cal: &CalibrationConstants) -> Result<(), Box<dyn std::error::Error>> {
    let positive = [
        ("NTC_R_SERIES", cal.r_series),
        ("NTC_B_COEFF", cal.b_coeff),
        ("NTC_R_NOMINAL", cal.r_nominal),
    ];
    for (key, value) in positive {
        if !(value.is_finite() && value > 0.0) {
            return Err(format!("{} must be a positive number, got {}", key, value).into());
        }
    }
    if !cal.t_nominal.is_finite() {
        return Err(format!("NTC_T_NOMINAL must be finite, got {}", cal.t_nominal).into());
    }
    if cal.adc_max < 2 {
        return Err(format!("ADC_MAX must be at least 2, got {}", cal.adc_max).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("STATION_USER", "user@example.com"),
            ("STATION_DEVICE", "meteoStation_1"),
            ("NTC_ADC_PATH", "/sys/bus/iio/devices/iio:device0/in_voltage6_raw"),
            ("LDR_ADC_PATH", "/sys/bus/iio/devices/iio:device0/in_voltage7_raw"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<StationConfig, String> {
        StationConfig::from_vars(|key| vars.get(key).map(|v| v.to_string()))
            .map_err(|e| e.to_string())
    }

    #[test]
    fn defaults_follow_module_firmware() {
        let config = load(&base_vars()).unwrap();
        assert_eq!(config.user, "user@example.com");
        assert_eq!(config.device, "meteoStation_1");
        assert_eq!(config.calibration, CalibrationConstants::MODULE_DEFAULT);
        assert_eq!(config.samples_per_read, 20);
        assert_eq!(config.sample_delay, Duration::from_millis(5));
        assert_eq!(config.read_interval, Duration::from_secs(10));
        assert_eq!(config.warmup, Duration::from_secs(2));
        assert_eq!(config.dht, None);
    }

    #[test]
    fn overrides_calibration() {
        let mut vars = base_vars();
        vars.insert("NTC_R_NOMINAL", "10000");
        vars.insert("NTC_B_COEFF", "3435.5");
        vars.insert("ADC_MAX", "1023");
        let config = load(&vars).unwrap();
        assert_eq!(config.calibration.r_nominal, 10_000.0);
        assert_eq!(config.calibration.b_coeff, 3435.5);
        assert_eq!(config.calibration.adc_max, 1023);
        assert_eq!(config.calibration.r_series, 10_000.0);
    }

    #[test]
    fn dht_requires_both_paths() {
        let mut vars = base_vars();
        vars.insert("DHT_TEMPERATURE_PATH", "/tmp/in_temp_input");
        assert_eq!(load(&vars).unwrap().dht, None);

        vars.insert("DHT_HUMIDITY_PATH", "/tmp/in_humidityrelative_input");
        let dht = load(&vars).unwrap().dht.unwrap();
        assert_eq!(dht.temperature, PathBuf::from("/tmp/in_temp_input"));
        assert_eq!(dht.humidity, PathBuf::from("/tmp/in_humidityrelative_input"));
    }

    #[test]
    fn missing_identity_is_reported() {
        let mut vars = base_vars();
        vars.remove("STATION_DEVICE");
        let err = load(&vars).unwrap_err();
        assert!(err.contains("STATION_DEVICE"), "{err}");
    }

    #[test]
    fn invalid_number_names_variable() {
        let mut vars = base_vars();
        vars.insert("NTC_B_COEFF", "abc");
        let err = load(&vars).unwrap_err();
        assert!(err.contains("NTC_B_COEFF"), "{err}");
    }

    #[test]
    fn rejects_degenerate_calibration() {
        let mut vars = base_vars();
        vars.insert("NTC_R_SERIES", "0");
        assert!(load(&vars).is_err());

        let mut vars = base_vars();
        vars.insert("ADC_MAX", "1");
        assert!(load(&vars).is_err());
    }

    #[test]
    fn rejects_empty_batches() {
        let mut vars = base_vars();
        vars.insert("SAMPLES_PER_READ", "0");
        assert!(load(&vars).is_err());
    }

    #[test]
    fn caps_batch_size() {
        let mut vars = base_vars();
        vars.insert("SAMPLES_PER_READ", "256");
        assert_eq!(load(&vars).unwrap().samples_per_read, MAX_SAMPLES_PER_READ);

        vars.insert("SAMPLES_PER_READ", "1000");
        let err = load(&vars).unwrap_err();
        assert!(err.contains("SAMPLES_PER_READ"), "{err}");
    }
}
