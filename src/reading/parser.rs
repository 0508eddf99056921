use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::types::{Accelerometer, Gps, SensorKind};
use crate::error::DataSourceError;

/// Split one line into comma-separated fields
///
/// Quoted fields are honoured and surrounding whitespace is trimmed. An empty
/// line yields no record.
fn split_record(line: &str) -> Option<StringRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(line.as_bytes());

    reader.records().next().and_then(Result::ok)
}

/// Parse every field of `line` as `T`, requiring exactly `count` fields
fn parse_fields<T: FromStr>(
    line: &str,
    count: usize,
    kind: SensorKind,
) -> Result<Vec<T>, DataSourceError> {
    let record = split_record(line).ok_or_else(|| DataSourceError::invalid(kind, line))?;

    if record.len() != count {
        return Err(DataSourceError::invalid(kind, line));
    }

    record
        .iter()
        .map(|field| field.parse::<T>())
        .collect::<Result<Vec<T>, _>>()
        .map_err(|_| DataSourceError::invalid(kind, line))
}

/// Parse an accelerometer record: `x,y,z`
pub fn parse_accelerometer(line: &str) -> Result<Accelerometer, DataSourceError> {
    let values = parse_fields::<i64>(line, 3, SensorKind::Accelerometer)?;
    Ok(Accelerometer::new(values[0], values[1], values[2]))
}

/// Parse a GPS record: `longitude,latitude`
pub fn parse_gps(line: &str) -> Result<Gps, DataSourceError> {
    let values = parse_fields::<f64>(line, 2, SensorKind::Gps)?;
    Ok(Gps::new(values[0], values[1]))
}

/// Parse a parking record: `empty_count[,...]`, extra fields are ignored
pub fn parse_parking_count(line: &str) -> Result<i64, DataSourceError> {
    split_record(line)
        .as_ref()
        .and_then(|record| record.get(0))
        .and_then(|field| field.parse::<i64>().ok())
        .ok_or_else(|| DataSourceError::invalid(SensorKind::Parking, line))
}
