pub mod file;

use std::path::PathBuf;

use crate::error::AgentError;
use crate::reading::AggregatedData;

/// Trait for abstracting sources of aggregated readings
///
/// Reads are synchronous and blocking; callers running inside the async
/// runtime drive a source from a blocking task.
pub trait DataSource: Send {
    /// Open the underlying inputs. Calling again reopens them from the start.
    fn start_reading(&mut self) -> Result<(), AgentError>;

    /// Pull one record from every input and combine them
    fn read(&mut self) -> Result<AggregatedData, AgentError>;

    /// Release the underlying inputs
    fn stop_reading(&mut self) -> Result<(), AgentError>;

    /// Check if the inputs are currently open
    fn is_active(&self) -> bool;

    /// Get the name of this data source for logging
    fn name(&self) -> &str;
}

/// Configuration for creating a file-backed data source
#[derive(Debug, Clone, PartialEq)]
pub struct FileSourceConfig {
    pub accelerometer: PathBuf,
    pub gps: PathBuf,
    pub parking: PathBuf,
}

impl FileSourceConfig {
    /// Create a data source from this configuration
    pub fn create_source(&self) -> Box<dyn DataSource> {
        Box::new(file::FileDataSource::new(
            self.accelerometer.clone(),
            self.gps.clone(),
            self.parking.clone(),
        ))
    }
}
