use crossbeam_channel::{Receiver, Sender, bounded};

use crate::error::{Error, Result};
use crate::protocol::WorkerUpdate;

/// Creates the two halves of a worker lifecycle channel.
///
/// Both lanes are zero-capacity: a report and the matching wait rendezvous,
/// so neither side can run ahead of the other and no update is ever
/// buffered. Each half has a single owner; dropping one half interrupts any
/// wait blocked on the other.
pub fn lifecycle_channel() -> (LifecycleReporter, LifecycleMonitor) {
    let (ready_tx, ready_rx) = bounded(0);
    let (stopped_tx, stopped_rx) = bounded(0);
    (
        LifecycleReporter {
            ready_tx,
            stopped_tx,
        },
        LifecycleMonitor {
            ready_rx,
            stopped_rx,
        },
    )
}

/// Producer half, owned by the worker.
#[derive(Debug)]
pub struct LifecycleReporter {
    ready_tx: Sender<WorkerUpdate>,
    stopped_tx: Sender<WorkerUpdate>,
}

impl LifecycleReporter {
    /// Reports one lifecycle update, blocking until the consumer reaches
    /// the matching wait.
    ///
    /// Updates whose phase signals readiness (`Running`, and deliberately
    /// also `Failed`) go to the ready lane; every other phase goes to the
    /// stopped lane.
    pub fn report(&self, update: WorkerUpdate) -> Result<()> {
        let (lane, context) = if update.phase.signals_ready() {
            (&self.ready_tx, "report of ready update")
        } else {
            (&self.stopped_tx, "report of stopped update")
        };
        lane.send(update)
            .map_err(|_| Error::wait_interrupted(context))
    }
}

/// Consumer half, owned by the coordinator driving the worker.
#[derive(Debug)]
pub struct LifecycleMonitor {
    ready_rx: Receiver<WorkerUpdate>,
    stopped_rx: Receiver<WorkerUpdate>,
}

impl LifecycleMonitor {
    /// Blocks until the worker reports a phase that signals readiness.
    ///
    /// A `Failed` update satisfies this wait too; inspect the returned
    /// phase before treating the worker as usable.
    pub fn await_ready(&self) -> Result<WorkerUpdate> {
        self.ready_rx
            .recv()
            .map_err(|_| Error::wait_interrupted("wait for ready update"))
    }

    /// Blocks until the worker reports a phase outside the ready set.
    pub fn await_stopped(&self) -> Result<WorkerUpdate> {
        self.stopped_rx
            .recv()
            .map_err(|_| Error::wait_interrupted("wait for stopped update"))
    }
}
