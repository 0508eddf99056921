pub mod parser;
pub mod types;

pub use parser::{parse_accelerometer, parse_gps, parse_parking_count};
pub use types::{Accelerometer, AggregatedData, Gps, Parking, SensorKind};
