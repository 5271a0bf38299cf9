pub mod iio;

pub use iio::{collect_samples, read_dht};
