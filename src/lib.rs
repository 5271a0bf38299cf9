//! Sensor-to-telemetry pipeline of the meteo station node
//!
//! Raw ADC batches are averaged, converted through the thermistor (Beta
//! equation) and LDR models, and assembled with the DHT11 readings into one
//! JSON telemetry record per cycle. All conversions are pure functions over
//! an immutable `CalibrationConstants`.

pub mod config;
pub mod conversion;
pub mod errors;
pub mod models;
pub mod sensors;
pub mod telemetry;
pub mod utils;

pub use errors::{ConversionError, ConversionResult};
pub use models::{CalibrationConstants, DhtReading, RawSample, TelemetryRecord};
