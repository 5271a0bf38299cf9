/// Utility functions for timestamps and value formatting
use time::{format_description, OffsetDateTime, UtcOffset};

/// Lower edge of the physically plausible thermistor band, in Celsius
pub const PLAUSIBLE_MIN_CELSIUS: f64 = -40.0;
/// Upper edge of the physically plausible thermistor band, in Celsius
pub const PLAUSIBLE_MAX_CELSIUS: f64 = 150.0;

/// Local UTC offset of the node, or UTC when it cannot be determined
///
/// The platform offset can only be queried soundly while the process is
/// single-threaded, so call this before the async runtime starts.
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

/// Format a timestamp for the telemetry payload
///
/// Produces ISO 8601 `YYYY-MM-DDTHH:MM:SS+HH:MM`. The offset is always
/// written numerically, so UTC comes out as `+00:00` rather than `Z`.
pub fn format_timestamp(dt: &OffsetDateTime) -> Result<String, time::error::Error> {
    let format = format_description::parse(
        "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]",
    )?;
    Ok(dt.format(&format)?)
}

/// Round a value to a fixed number of decimal places
pub fn round_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Whether a thermistor temperature lies in the realistic band
///
/// Values outside point at wrong calibration constants or a wiring fault.
pub fn is_plausible_temperature(celsius: f64) -> bool {
    PLAUSIBLE_MIN_CELSIUS < celsius && celsius < PLAUSIBLE_MAX_CELSIUS
}
