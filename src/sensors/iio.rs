/// Sampling through the Linux Industrial I/O (IIO) sysfs interface
///
/// ADC channels expose one integer per read in `in_voltageN_raw`. The DHT11
/// driver exposes `in_temp_input` and `in_humidityrelative_input`, both in
/// thousandths of their unit.
use log::{debug, warn};
use std::io;
use std::path::Path;
use tokio::time::{sleep, Duration};

use crate::models::{DhtReading, RawSample};

/// Read one raw sample from an ADC channel file
pub async fn read_raw_sample(path: &Path) -> io::Result<RawSample> {
    let content = tokio::fs::read_to_string(path).await?;
    content.trim().parse::<RawSample>().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Invalid ADC value {:?} in {}: {}", content.trim(), path.display(), e),
        )
    })
}

/// Collect a batch of raw samples from an ADC channel
///
/// Takes `count` reads spaced by `delay` to average out converter noise over
/// a short window. A failed read aborts the batch.
pub async fn collect_samples(
    path: &Path,
    count: usize,
    delay: Duration,
) -> io::Result<Vec<RawSample>> {
    let mut samples = Vec::with_capacity(count);

    for i in 0..count {
        samples.push(read_raw_sample(path).await?);
        if i + 1 < count && !delay.is_zero() {
            sleep(delay).await;
        }
    }

    debug!("Collected {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Read a value given in thousandths of its unit (milli-degrees, milli-percent)
async fn read_milli(path: &Path) -> io::Result<f64> {
    let content = tokio::fs::read_to_string(path).await?;
    let milli = content.trim().parse::<i64>().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Invalid value {:?} in {}: {}", content.trim(), path.display(), e),
        )
    })?;
    Ok(milli as f64 / 1000.0)
}

/// Read temperature and humidity from the DHT11
///
/// The DHT11 misses reads regularly (the driver then returns EIO). Any
/// failure on either value yields `None` so the payload carries nulls for
/// both fields.
pub async fn read_dht(temperature_path: &Path, humidity_path: &Path) -> Option<DhtReading> {
    let temperature = match read_milli(temperature_path).await {
        Ok(value) => value,
        Err(e) => {
            warn!("DHT11 temperature read failed: {}", e);
            return None;
        }
    };

    let humidity = match read_milli(humidity_path).await {
        Ok(value) => value,
        Err(e) => {
            warn!("DHT11 humidity read failed: {}", e);
            return None;
        }
    };

    Some(DhtReading {
        temperature,
        humidity,
    })
}
