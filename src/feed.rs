use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::Result;
use crate::process::{self, ProcessRecord};

/// Text shown in the feed for one running process
pub fn format_line(record: &ProcessRecord) -> String {
    format!("[{}] SCANNING >> {}... OK", record.pid, record.name)
}

/// Outcome of one pass over the process table
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub emitted: usize,
    pub skipped: usize,
}

/// Sends one line per running process to `tx`, sleeping `pace` after each.
///
/// Entries that failed to read are skipped without a trace. The scan also stops
/// early if the receiving side has gone away.
pub fn scan<I, E>(records: I, tx: &Sender<String>, pace: Duration, notify: &dyn Fn()) -> ScanSummary
where
    I: IntoIterator<Item = std::result::Result<ProcessRecord, E>>,
{
    let mut summary = ScanSummary::default();

    for entry in records {
        let record = match entry {
            Ok(r) => r,
            Err(_) => {
                summary.skipped += 1;
                continue;
            }
        };

        if !record.status.is_running() {
            continue;
        }

        if tx.send(format_line(&record)).is_err() {
            break;
        }
        summary.emitted += 1;
        notify();

        if !pace.is_zero() {
            thread::sleep(pace);
        }
    }

    summary
}

/// Starts the one-shot feed worker. The thread exits once the scan is done,
/// which closes the returned channel.
pub fn spawn<F>(pace: Duration, notify: F) -> Result<(Receiver<String>, JoinHandle<()>)>
where
    F: Fn() + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    let handle = thread::Builder::new()
        .name("process-feed".into())
        .spawn(move || {
            let records = match process::snapshot() {
                Ok(records) => records,
                Err(e) => {
                    warn!("Failed to list processes: {}", e);
                    return;
                }
            };

            let summary = scan(records, &tx, pace, &notify);
            debug!(emitted = summary.emitted, skipped = summary.skipped, "process scan finished");
        })?;

    Ok((rx, handle))
}

/// UI-side buffer of feed lines, filled from the worker's channel.
pub struct FeedLog {
    lines: Vec<String>,
    rx: Option<Receiver<String>>,
}

impl FeedLog {
    pub fn new(rx: Receiver<String>) -> Self {
        FeedLog { lines: Vec::new(), rx: Some(rx) }
    }

    /// Appends everything the worker has sent so far; returns how many lines arrived.
    pub fn drain(&mut self) -> usize {
        let Some(rx) = &self.rx else {
            return 0;
        };

        let before = self.lines.len();
        let closed = loop {
            match rx.try_recv() {
                Ok(line) => self.lines.push(line),
                Err(TryRecvError::Empty) => break false,
                Err(TryRecvError::Disconnected) => break true,
            }
        };

        if closed {
            debug!(lines = self.lines.len(), "process feed closed");
            self.rx = None;
        }
        self.lines.len() - before
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `true` once the worker has finished and every line has been drained
    pub fn is_finished(&self) -> bool {
        self.rx.is_none()
    }
}
