use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::data_source::FileSourceConfig;
use crate::service::reader::ReaderOptions;

#[derive(Parser, Debug)]
#[command(name = "sensor-agent")]
#[command(about = "Accelerometer, GPS and parking sensor agent")]
#[command(version)]
pub struct Cli {
    /// HTTP server port
    #[arg(short, long, default_value = "8100")]
    pub listen: u16,

    /// HTTP server host
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Accelerometer CSV file (x,y,z per line)
    #[arg(long, env = "ACCELEROMETER_FILE", default_value = "data/accelerometer.csv")]
    pub accelerometer: PathBuf,

    /// GPS CSV file (longitude,latitude per line)
    #[arg(long, env = "GPS_FILE", default_value = "data/gps.csv")]
    pub gps: PathBuf,

    /// Parking CSV file (empty_count per line)
    #[arg(long, env = "PARKING_FILE", default_value = "data/parking.csv")]
    pub parking: PathBuf,

    /// Delay between readings in milliseconds
    #[arg(long, env = "READ_DELAY_MS", default_value = "500")]
    pub delay_ms: u64,

    /// Start over from the first line when any file runs out
    #[arg(long, default_value = "false")]
    pub loop_files: bool,

    /// Stop after this many readings
    #[arg(long)]
    pub max_readings: Option<u64>,

    /// Identifier sent along with every reading
    #[arg(long, env = "AGENT_ID", default_value = "agent-1")]
    pub agent_id: String,

    /// Store API base URL; readings are only logged when unset
    #[arg(long, env = "STORE_API_URL")]
    pub store_api_url: Option<String>,
}

impl Cli {
    /// Convert CLI args to FileSourceConfig
    pub fn to_source_config(&self) -> FileSourceConfig {
        FileSourceConfig {
            accelerometer: self.accelerometer.clone(),
            gps: self.gps.clone(),
            parking: self.parking.clone(),
        }
    }

    /// Convert CLI args to ReaderOptions
    pub fn to_reader_options(&self) -> ReaderOptions {
        ReaderOptions {
            interval: Duration::from_millis(self.delay_ms),
            loop_files: self.loop_files,
            max_readings: self.max_readings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["sensor-agent"]);

        assert_eq!(cli.listen, 8100);
        assert_eq!(cli.host, "0.0.0.0");
        assert!(!cli.loop_files);
        assert!(cli.max_readings.is_none());
    }

    #[test]
    fn test_cli_parse_files() {
        let cli = Cli::parse_from([
            "sensor-agent",
            "--accelerometer",
            "/tmp/acc.csv",
            "--gps",
            "/tmp/gps.csv",
            "--parking",
            "/tmp/parking.csv",
        ]);

        let config = cli.to_source_config();
        assert_eq!(config.accelerometer, PathBuf::from("/tmp/acc.csv"));
        assert_eq!(config.gps, PathBuf::from("/tmp/gps.csv"));
        assert_eq!(config.parking, PathBuf::from("/tmp/parking.csv"));
    }

    #[test]
    fn test_to_reader_options() {
        let cli = Cli::parse_from([
            "sensor-agent",
            "--delay-ms",
            "250",
            "--loop-files",
            "--max-readings",
            "10",
        ]);

        let options = cli.to_reader_options();
        assert_eq!(options.interval, Duration::from_millis(250));
        assert!(options.loop_files);
        assert_eq!(options.max_readings, Some(10));
    }

    #[test]
    fn test_cli_store_api_url() {
        let cli = Cli::parse_from([
            "sensor-agent",
            "--store-api-url",
            "http://localhost:8000",
            "--agent-id",
            "bus-7",
            "-l",
            "8200",
        ]);

        assert_eq!(cli.store_api_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(cli.agent_id, "bus-7");
        assert_eq!(cli.listen, 8200);
    }
}
