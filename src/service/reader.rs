use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::data_source::DataSource;
use crate::error::{AgentError, DataSourceError};
use crate::reading::AggregatedData;

/// How the reader task paces and ends its read loop
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderOptions {
    /// Pause between two reads
    pub interval: Duration,
    /// Reopen the inputs from the start when one of them runs out
    pub loop_files: bool,
    /// Stop after this many successful readings
    pub max_readings: Option<u64>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(500),
            loop_files: false,
            max_readings: None,
        }
    }
}

/// Events forwarded from the reader task
#[derive(Debug, Clone, PartialEq)]
pub enum ReaderEvent {
    /// A complete aggregated reading
    Reading(AggregatedData),
    /// A record that could not be parsed; reading continues
    Rejected(String),
    /// The reader has stopped, with the error that stopped it if any
    Finished { error: Option<String> },
}

/// Handle to a running reader task
pub struct ReaderHandle {
    is_active: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl ReaderHandle {
    pub fn is_active(&self) -> bool {
        self.is_active.load(Ordering::SeqCst)
    }

    /// Ask the reader to stop and wait for it to release its inputs
    pub async fn stop(&mut self) {
        self.is_active.store(false, Ordering::SeqCst);

        if let Some(handle) = self.task.take() {
            match handle.await {
                Err(e) if e.is_panic() => tracing::error!("Reader task panicked: {}", e),
                _ => {}
            }
        }

        tracing::info!("Reader task stopped");
    }
}

/// Open `source` and drive it from a blocking task
///
/// Open failures are returned here; everything after that is reported through
/// the returned channel, which always ends with [`ReaderEvent::Finished`].
pub fn spawn_reader(
    mut source: Box<dyn DataSource>,
    options: ReaderOptions,
) -> Result<(mpsc::Receiver<ReaderEvent>, ReaderHandle), AgentError> {
    source.start_reading()?;

    let (event_tx, event_rx) = mpsc::channel(32);

    let is_active = Arc::new(AtomicBool::new(true));
    let task_active = is_active.clone();

    let task = tokio::task::spawn_blocking(move || {
        let error = run_reader(source.as_mut(), &options, &task_active, &event_tx);

        if let Err(e) = source.stop_reading() {
            tracing::warn!("Failed to release {}: {}", source.name(), e);
        }
        task_active.store(false, Ordering::SeqCst);

        let _ = event_tx.blocking_send(ReaderEvent::Finished { error });
    });

    Ok((
        event_rx,
        ReaderHandle {
            is_active,
            task: Some(task),
        },
    ))
}

/// Blocking read loop; returns the error that ended it, if any
fn run_reader(
    source: &mut dyn DataSource,
    options: &ReaderOptions,
    is_active: &AtomicBool,
    event_tx: &mpsc::Sender<ReaderEvent>,
) -> Option<String> {
    tracing::info!("Reader started on {}", source.name());

    let mut produced: u64 = 0;
    // Guards against reopening forever when a file is empty
    let mut consumed_since_open = false;

    while is_active.load(Ordering::SeqCst) {
        let event = match source.read() {
            Ok(reading) => {
                produced += 1;
                consumed_since_open = true;
                ReaderEvent::Reading(reading)
            }
            Err(AgentError::DataSource(DataSourceError::EndOfData(kind))) => {
                if !options.loop_files || !consumed_since_open {
                    tracing::info!("No more {} data, stopping reader", kind);
                    break;
                }

                tracing::info!("No more {} data, restarting from the first line", kind);
                if let Err(e) = source.stop_reading().and_then(|_| source.start_reading()) {
                    tracing::error!("Failed to reopen {}: {}", source.name(), e);
                    return Some(e.to_string());
                }
                consumed_since_open = false;
                continue;
            }
            Err(AgentError::DataSource(e @ DataSourceError::InvalidFormat { .. })) => {
                tracing::warn!("Skipping record: {}", e);
                consumed_since_open = true;
                ReaderEvent::Rejected(e.to_string())
            }
            Err(e) => {
                tracing::error!("Read error on {}: {}", source.name(), e);
                return Some(e.to_string());
            }
        };

        if event_tx.blocking_send(event).is_err() {
            tracing::warn!("Event receiver dropped, stopping reader");
            break;
        }

        if options.max_readings.is_some_and(|max| produced >= max) {
            tracing::info!("Reached {} readings, stopping reader", produced);
            break;
        }

        std::thread::sleep(options.interval);
    }

    tracing::info!("Reader finished after {} readings", produced);
    None
}
