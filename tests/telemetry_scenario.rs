use serde_json::{json, Value};

use meteo_station::conversion::{adc_average, ldr_percentage, ntc_temperature};
use meteo_station::telemetry::payload::from_json;
use meteo_station::telemetry::{build_payload, format_topic, to_json};
use meteo_station::{CalibrationConstants, ConversionError};

#[test]
fn station_payload_and_topic() {
    let record = build_payload(
        "2026-02-08T15:30:00+01:00",
        "user@example.com",
        "meteoStation_1",
        Some(20.7),
        Some(52.0),
        21.1,
        77.0,
    );
    let value: Value = serde_json::from_str(&to_json(&record).unwrap()).unwrap();

    assert_eq!(
        value,
        json!({
            "timestamp": "2026-02-08T15:30:00+01:00",
            "user": "user@example.com",
            "device": "meteoStation_1",
            "dht_temperature": 20.7,
            "dht_humidity": 52.0,
            "ntc_temperature": 21.1,
            "luminosity": 77.0,
        })
    );
    assert_eq!(
        format_topic(&record.user, &record.device),
        "sensors/user@example.com/meteoStation_1"
    );
}

#[test]
fn failed_secondary_sensor_keeps_other_fields() {
    let record = build_payload(
        "2026-02-08T15:30:00+01:00",
        "user@example.com",
        "meteoStation_1",
        None,
        None,
        21.1,
        77.0,
    );
    let json = to_json(&record).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert!(value["dht_temperature"].is_null());
    assert!(value["dht_humidity"].is_null());
    assert_eq!(value.as_object().unwrap().len(), 7);
    assert_eq!(value["ntc_temperature"], 21.1);
    assert_eq!(value["luminosity"], 77.0);
    assert_eq!(from_json(&json).unwrap(), record);
}

#[test]
fn raw_batches_to_payload() {
    let cal = CalibrationConstants::default();

    let ntc_raw = adc_average(&[610, 612, 614, 616]).unwrap();
    let ldr_raw = adc_average(&[3150; 20]).unwrap();

    let ntc = ntc_temperature(ntc_raw, &cal).unwrap();
    let light = ldr_percentage(ldr_raw, &cal);
    assert!(ntc > 24.0 && ntc < 26.0, "{ntc}");
    assert!((light - 76.92).abs() < 0.01, "{light}");

    let record = build_payload("2026-02-08T15:30:00+01:00", "u", "d", None, None, ntc, light);
    assert_eq!(from_json(&to_json(&record).unwrap()).unwrap(), record);
}

#[test]
fn circuit_faults_are_reported() {
    let cal = CalibrationConstants::default();
    assert_eq!(adc_average(&[]), Err(ConversionError::InvalidInput));
    assert!(matches!(
        ntc_temperature(0.0, &cal),
        Err(ConversionError::OutOfRange { .. })
    ));
    assert!(matches!(
        ntc_temperature(f64::from(cal.adc_max), &cal),
        Err(ConversionError::OutOfRange { .. })
    ));
}
