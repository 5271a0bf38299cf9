/// Telemetry payload construction and JSON encoding
use crate::models::TelemetryRecord;

/// Assemble one telemetry record from the readings of a cycle
///
/// The DHT values are independently nullable. When absent they stay `None`
/// and serialize as an explicit `null`, never as a numeric placeholder.
///
/// `ntc_temperature` and `luminosity` must be finite: JSON has no NaN or
/// infinity, so such a record would encode as `null` and fail to parse back.
#[allow(clippy::too_many_arguments)]
pub fn build_payload(
    timestamp: impl Into<String>,
    user: impl Into<String>,
    device: impl Into<String>,
    dht_temperature: Option<f64>,
    dht_humidity: Option<f64>,
    ntc_temperature: f64,
    luminosity: f64,
) -> TelemetryRecord {
    debug_assert!(
        ntc_temperature.is_finite() && luminosity.is_finite(),
        "non-finite reading: ntc_temperature={}, luminosity={}",
        ntc_temperature,
        luminosity
    );

    TelemetryRecord {
        timestamp: timestamp.into(),
        user: user.into(),
        device: device.into(),
        dht_temperature,
        dht_humidity,
        ntc_temperature,
        luminosity,
    }
}

/// Serialize a record to its JSON wire form
pub fn to_json(record: &TelemetryRecord) -> serde_json::Result<String> {
    serde_json::to_string(record)
}

/// Parse a record back from its JSON wire form
pub fn from_json(json: &str) -> serde_json::Result<TelemetryRecord> {
    serde_json::from_str(json)
}
