use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::DataSource;
use crate::error::{AgentError, DataSourceError};
use crate::reading::{
    AggregatedData, Parking, SensorKind, parse_accelerometer, parse_gps, parse_parking_count,
};

/// An open input file consumed one line at a time
struct LineStream {
    kind: SensorKind,
    reader: BufReader<File>,
    buf: Vec<u8>,
}

impl LineStream {
    fn open(path: &Path, kind: SensorKind) -> Result<Self, AgentError> {
        let file = File::open(path)?;
        Ok(Self {
            kind,
            reader: BufReader::new(file),
            buf: Vec::new(),
        })
    }

    /// Advance the cursor by one line, without its line terminator
    ///
    /// A line that is not valid UTF-8 is a malformed record, not an I/O failure.
    fn next_line(&mut self) -> Result<&str, AgentError> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Err(DataSourceError::EndOfData(self.kind).into());
        }

        let line = std::str::from_utf8(&self.buf).map_err(|_| {
            let lossy = String::from_utf8_lossy(&self.buf);
            DataSourceError::invalid(self.kind, lossy.trim_end_matches(['\n', '\r']))
        })?;
        Ok(line.trim_end_matches(['\n', '\r']))
    }
}

/// The three handles opened by `start_reading`
struct OpenStreams {
    accelerometer: LineStream,
    gps: LineStream,
    parking: LineStream,
}

/// Data source reading accelerometer, GPS and parking records from CSV files
///
/// Each `read` consumes exactly one line from each file. Handles are released
/// on `stop_reading` or when the source is dropped.
pub struct FileDataSource {
    accelerometer_path: PathBuf,
    gps_path: PathBuf,
    parking_path: PathBuf,
    name: String,
    streams: Option<OpenStreams>,
}

impl FileDataSource {
    pub fn new(accelerometer_path: PathBuf, gps_path: PathBuf, parking_path: PathBuf) -> Self {
        let name = format!(
            "files[{}, {}, {}]",
            accelerometer_path.display(),
            gps_path.display(),
            parking_path.display()
        );

        Self {
            accelerometer_path,
            gps_path,
            parking_path,
            name,
            streams: None,
        }
    }
}

impl DataSource for FileDataSource {
    fn start_reading(&mut self) -> Result<(), AgentError> {
        // Open all three before replacing anything, so a failure keeps the old state
        let streams = OpenStreams {
            accelerometer: LineStream::open(&self.accelerometer_path, SensorKind::Accelerometer)?,
            gps: LineStream::open(&self.gps_path, SensorKind::Gps)?,
            parking: LineStream::open(&self.parking_path, SensorKind::Parking)?,
        };
        self.streams = Some(streams);
        Ok(())
    }

    fn read(&mut self) -> Result<AggregatedData, AgentError> {
        let streams = self.streams.as_mut().ok_or(DataSourceError::MissingData)?;

        let accelerometer = parse_accelerometer(streams.accelerometer.next_line()?)?;
        let gps = parse_gps(streams.gps.next_line()?)?;
        let empty_count = parse_parking_count(streams.parking.next_line()?)?;

        Ok(AggregatedData::new(
            accelerometer,
            gps,
            Parking::new(empty_count, gps),
        ))
    }

    fn stop_reading(&mut self) -> Result<(), AgentError> {
        self.streams = None;
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.streams.is_some()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
