use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw accelerometer axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accelerometer {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Accelerometer {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }
}

/// GPS fix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gps {
    pub longitude: f64,
    pub latitude: f64,
}

impl Gps {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// Parking lot occupancy, located at the GPS fix read alongside it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parking {
    pub empty_count: i64,
    pub gps: Gps,
}

impl Parking {
    pub fn new(empty_count: i64, gps: Gps) -> Self {
        Self { empty_count, gps }
    }
}

/// One combined snapshot of all three inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedData {
    pub accelerometer: Accelerometer,
    pub gps: Gps,
    pub parking: Parking,
    pub timestamp: DateTime<Utc>,
}

impl AggregatedData {
    pub fn new(accelerometer: Accelerometer, gps: Gps, parking: Parking) -> Self {
        Self::with_timestamp(Utc::now(), accelerometer, gps, parking)
    }

    pub fn with_timestamp(
        timestamp: DateTime<Utc>,
        accelerometer: Accelerometer,
        gps: Gps,
        parking: Parking,
    ) -> Self {
        Self {
            accelerometer,
            gps,
            parking,
            timestamp,
        }
    }
}

/// Input stream identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    Accelerometer,
    Gps,
    Parking,
}

impl SensorKind {
    /// Key used for this stream in logs and status output
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorKind::Accelerometer => "accelerometer",
            SensorKind::Gps => "gps",
            SensorKind::Parking => "parking",
        }
    }

    /// Human description of what a record of this kind must contain
    pub fn expected_format(&self) -> &'static str {
        match self {
            SensorKind::Accelerometer => "a sequence of integers",
            SensorKind::Gps => "a sequence of floats",
            SensorKind::Parking => "a single integer",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorKind::Gps => f.write_str("GPS"),
            other => f.write_str(other.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_parking_carries_gps() {
        let gps = Gps::new(30.52, 50.45);
        let parking = Parking::new(12, gps);

        assert_eq!(parking.gps, gps);
        assert_eq!(parking.empty_count, 12);
    }

    #[test]
    fn test_aggregated_data_timestamp_is_now() {
        let before = Utc::now();
        let gps = Gps::new(1.0, 2.0);
        let data = AggregatedData::new(Accelerometer::new(1, 2, 3), gps, Parking::new(0, gps));

        assert!(data.timestamp >= before);
        assert!(data.timestamp <= Utc::now());
    }

    #[test]
    fn test_aggregated_data_json_shape() {
        let timestamp = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let gps = Gps::new(10.5, 20.5);
        let data = AggregatedData::with_timestamp(
            timestamp,
            Accelerometer::new(1, 2, 3),
            gps,
            Parking::new(4, gps),
        );

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["accelerometer"]["z"], 3);
        assert_eq!(json["gps"]["longitude"], 10.5);
        assert_eq!(json["parking"]["empty_count"], 4);
        assert_eq!(json["parking"]["gps"]["latitude"], 20.5);
        assert_eq!(json["timestamp"], "2026-01-01T00:00:00Z");
    }

    #[test]
    fn test_sensor_kind_labels() {
        assert_eq!(SensorKind::Gps.as_str(), "gps");
        assert_eq!(SensorKind::Gps.to_string(), "GPS");
        assert_eq!(SensorKind::Parking.to_string(), "parking");
        assert_eq!(
            serde_json::to_string(&SensorKind::Accelerometer).unwrap(),
            "\"accelerometer\""
        );
    }
}
