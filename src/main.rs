use futures_util::future::try_join;
use log::{error, info};
use std::io::Write;
use time::{OffsetDateTime, UtcOffset};
use tokio::time::{interval, sleep, MissedTickBehavior};

use meteo_station::config::StationConfig;
use meteo_station::sensors::{collect_samples, read_dht};
use meteo_station::telemetry::{assemble_record, format_topic, to_json, CycleReadings};
use meteo_station::utils::{format_timestamp, local_offset};
use meteo_station::TelemetryRecord;

/// Gather the DHT11 reading and both ADC batches of one cycle
async fn read_cycle(config: &StationConfig) -> Result<CycleReadings, Box<dyn std::error::Error>> {
    let dht = match &config.dht {
        Some(paths) => read_dht(&paths.temperature, &paths.humidity).await,
        None => None,
    };

    let (ntc_samples, ldr_samples) = try_join(
        collect_samples(
            &config.ntc_adc_path,
            config.samples_per_read,
            config.sample_delay,
        ),
        collect_samples(
            &config.ldr_adc_path,
            config.samples_per_read,
            config.sample_delay,
        ),
    )
    .await?;

    Ok(CycleReadings {
        ntc_samples,
        ldr_samples,
        dht,
    })
}

fn log_readings(record: &TelemetryRecord) {
    info!("--- Sensor readings ---");
    match (record.dht_temperature, record.dht_humidity) {
        (Some(temperature), Some(humidity)) => {
            info!("DHT11           : {:.1}°C | {:.1}%", temperature, humidity)
        }
        _ => info!("DHT11           : read error"),
    }
    info!("NTC temperature : {:.1}°C", record.ntc_temperature);
    info!("Luminosity      : {:.0}%", record.luminosity);
}

/// Hand a payload to the broker client reading our stdout
fn publish(topic: &str, payload: &str) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{} {}", topic, payload)?;
    out.flush()
}

async fn main_loop(
    config: StationConfig,
    offset: UtcOffset,
) -> Result<(), Box<dyn std::error::Error>> {
    let topic = format_topic(&config.user, &config.device);
    info!(
        "Starting meteo station, publishing every {}s to {}",
        config.read_interval.as_secs(),
        topic
    );

    // Let the sensors settle after power-up
    sleep(config.warmup).await;

    let mut ticker = interval(config.read_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let readings = match read_cycle(&config).await {
            Ok(readings) => readings,
            Err(e) => {
                error!("Sampling failed: {}", e);
                continue;
            }
        };

        let timestamp = format_timestamp(&OffsetDateTime::now_utc().to_offset(offset))?;
        let record = match assemble_record(
            timestamp,
            &config.user,
            &config.device,
            &config.calibration,
            &readings,
        ) {
            Ok(record) => record,
            Err(e) => {
                error!("Sensor fault, skipping cycle: {}", e);
                continue;
            }
        };

        log_readings(&record);

        let payload = to_json(&record)?;
        if let Err(e) = publish(&topic, &payload) {
            error!("Failed to publish telemetry: {}", e);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_secs()
        .init();

    // Must run before the runtime spawns its worker threads
    let offset = local_offset();

    // Load configuration
    let config = match StationConfig::new() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        tokio::select! {
            result = main_loop(config, offset) => {
                match result {
                    Ok(_) => info!("Program completed successfully"),
                    Err(e) => error!("Fatal error: {}", e),
                }
            }
            signal = tokio::signal::ctrl_c() => {
                match signal {
                    Ok(()) => info!("Program terminated by user. Exiting gracefully."),
                    Err(e) => error!("Failed to listen for Ctrl+C: {}", e),
                }
            }
        }
    });

    Ok(())
}
