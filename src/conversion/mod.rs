pub mod averaging;
pub mod light;
pub mod thermistor;

pub use averaging::adc_average;
pub use light::ldr_percentage;
pub use thermistor::{ntc_resistance, ntc_temperature};
