/// Background scan workers.
///
/// Each call spawns one named thread that runs a single scan and sends
/// exactly one [`ScanOutcome`] over a bounded(1) crossbeam channel. Workers
/// share no mutable state, so any number may run at once.
///
/// There is no cancellation. A caller that loses interest drops the
/// [`ScanHandle`]; the worker finishes, its send fails, and the result is
/// discarded.
use crate::analysis::duplicates::{find_duplicates, DuplicateOptions};
use crate::error::{Result, ScanError};
use crate::model::{DuplicateGroup, ScanResult};
use crate::scanner::{scan_folder, ScanOptions};
use crossbeam_channel::{Receiver, TryRecvError};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Final message from a worker.
#[derive(Debug)]
pub enum ScanOutcome<T> {
    /// The scan finished and produced `result`.
    Complete { result: T, duration: Duration },
    /// The scan could not start (root unreadable) or the worker died.
    Failed(ScanError),
}

impl<T> ScanOutcome<T> {
    /// Convert to a plain `Result`, dropping the duration.
    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Complete { result, .. } => Ok(result),
            Self::Failed(err) => Err(err),
        }
    }
}

/// Handle to a running or completed worker.
pub struct ScanHandle<T> {
    outcome_rx: Receiver<ScanOutcome<T>>,
    /// Join handle for the worker thread (detached on drop).
    _thread: Option<thread::JoinHandle<()>>,
}

impl<T> ScanHandle<T> {
    /// Block until the worker reports.
    pub fn wait(self) -> ScanOutcome<T> {
        self.outcome_rx
            .recv()
            .unwrap_or(ScanOutcome::Failed(ScanError::WorkerLost))
    }

    /// Return the outcome if the worker has finished, without blocking.
    pub fn try_outcome(&self) -> Option<ScanOutcome<T>> {
        match self.outcome_rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(ScanOutcome::Failed(ScanError::WorkerLost)),
        }
    }
}

/// Start a folder scan on a background thread.
pub fn start_scan(root: PathBuf, options: ScanOptions) -> Result<ScanHandle<ScanResult>> {
    spawn_worker("storelens-scanner", move || scan_folder(&root, &options))
}

/// Start duplicate detection on a background thread.
pub fn start_duplicate_scan(
    root: PathBuf,
    options: DuplicateOptions,
) -> Result<ScanHandle<Vec<DuplicateGroup>>> {
    spawn_worker("storelens-duplicates", move || find_duplicates(&root, &options))
}

fn spawn_worker<T, F>(name: &str, job: F) -> Result<ScanHandle<T>>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    let (outcome_tx, outcome_rx) = crossbeam_channel::bounded::<ScanOutcome<T>>(1);
    let thread_name = name.to_owned();

    let thread = thread::Builder::new()
        .name(thread_name.clone())
        .spawn(move || {
            let start = Instant::now();
            let outcome = match job() {
                Ok(result) => ScanOutcome::Complete {
                    result,
                    duration: start.elapsed(),
                },
                Err(err) => {
                    warn!("{thread_name}: {err}");
                    ScanOutcome::Failed(err)
                }
            };
            if outcome_tx.send(outcome).is_err() {
                debug!("{thread_name}: handle dropped, discarding result");
            }
        })
        .map_err(ScanError::WorkerSpawn)?;

    Ok(ScanHandle {
        outcome_rx,
        _thread: Some(thread),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_delivers_result() {
        let handle = spawn_worker("test-worker", || Ok(42u32)).unwrap();
        match handle.wait() {
            ScanOutcome::Complete { result, .. } => assert_eq!(result, 42),
            ScanOutcome::Failed(err) => panic!("unexpected failure: {err}"),
        }
    }

    #[test]
    fn worker_delivers_error() {
        let handle = spawn_worker::<u32, _>("test-worker", || Err(ScanError::WorkerLost)).unwrap();
        assert!(matches!(
            handle.wait(),
            ScanOutcome::Failed(ScanError::WorkerLost)
        ));
    }

    #[test]
    fn panicking_worker_reports_lost() {
        let handle = spawn_worker::<u32, _>("test-worker", || panic!("boom")).unwrap();
        assert!(matches!(
            handle.wait(),
            ScanOutcome::Failed(ScanError::WorkerLost)
        ));
    }

    #[test]
    fn into_result_maps_variants() {
        let ok: ScanOutcome<u8> = ScanOutcome::Complete {
            result: 1,
            duration: Duration::ZERO,
        };
        assert_eq!(ok.into_result().unwrap(), 1);
        let failed: ScanOutcome<u8> = ScanOutcome::Failed(ScanError::WorkerLost);
        assert!(failed.into_result().is_err());
    }
}
