use std::thread::{self, JoinHandle};

use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::lifecycle::{LifecycleMonitor, LifecycleReporter, lifecycle_channel};
use crate::result_cell::ResultCell;

/// Endpoints handed to a worker job: the reporting half of its lifecycle
/// channel and the cell its outcomes go to.
///
/// The job owns lifecycle reporting; the harness never reports on its
/// behalf.
pub struct WorkerContext<T> {
    pub lifecycle: LifecycleReporter,
    pub outcome: ResultCell<T>,
}

/// Coordinator-side handle for a spawned worker thread.
pub struct WorkerHandle<T> {
    name: String,
    monitor: LifecycleMonitor,
    outcome: ResultCell<T>,
    join: JoinHandle<()>,
}

impl<T> WorkerHandle<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn monitor(&self) -> &LifecycleMonitor {
        &self.monitor
    }

    /// Waits for the worker thread to exit.
    pub fn join(self) -> Result<()> {
        self.join
            .join()
            .map_err(|_| Error::worker_panicked(self.name))
    }
}

impl<T: Clone> WorkerHandle<T> {
    pub fn latest_outcome(&self) -> Option<T> {
        self.outcome.current()
    }
}

/// Spawns `job` on a named thread wired to a fresh lifecycle channel and
/// outcome cell.
///
/// A job error is logged and the context dropped; any wait still blocked on
/// the lifecycle channel then fails with the interruption error instead of
/// receiving a fabricated update. A panicking job has the same effect and
/// additionally surfaces through [`WorkerHandle::join`].
pub fn spawn_worker<T, F>(name: &str, job: F) -> Result<WorkerHandle<T>>
where
    T: Send + 'static,
    F: FnOnce(WorkerContext<T>) -> anyhow::Result<()> + Send + 'static,
{
    let (reporter, monitor) = lifecycle_channel();
    let outcome = ResultCell::new();
    let ctx = WorkerContext {
        lifecycle: reporter,
        outcome: outcome.clone(),
    };

    let worker_name = name.to_string();
    let join = thread::Builder::new()
        .name(format!("gantry-worker-{name}"))
        .spawn(move || {
            debug!(target: "gantry_workers::worker", worker = %worker_name, "worker job started");
            if let Err(err) = job(ctx) {
                error!(target: "gantry_workers::worker", worker = %worker_name, "worker job failed: {err:#}");
            }
        })
        .map_err(|source| Error::spawn(name, source))?;

    Ok(WorkerHandle {
        name: name.to_string(),
        monitor,
        outcome,
        join,
    })
}
