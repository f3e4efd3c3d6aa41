/// Phase of a worker's lifecycle, as reported by the worker itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkerPhase {
    Running,
    Failed,
    Stopped,
}

impl WorkerPhase {
    /// Whether this phase satisfies a readiness wait.
    ///
    /// `Failed` deliberately counts as ready: a caller blocked awaiting
    /// readiness wakes up and can inspect the failed update instead of
    /// hanging until the worker stops. Check the phase of the update you
    /// receive before treating the worker as usable.
    pub fn signals_ready(self) -> bool {
        matches!(self, Self::Running | Self::Failed)
    }
}

/// A single lifecycle report from a worker, with optional human-readable
/// context (failure cause, stop reason).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerUpdate {
    pub phase: WorkerPhase,
    pub detail: Option<String>,
}

impl WorkerUpdate {
    pub fn new(phase: WorkerPhase, detail: Option<String>) -> Self {
        Self { phase, detail }
    }

    pub fn running() -> Self {
        Self::new(WorkerPhase::Running, None)
    }

    pub fn failed(detail: impl Into<String>) -> Self {
        Self::new(WorkerPhase::Failed, Some(detail.into()))
    }

    pub fn stopped() -> Self {
        Self::new(WorkerPhase::Stopped, None)
    }

    pub fn stopped_with(detail: impl Into<String>) -> Self {
        Self::new(WorkerPhase::Stopped, Some(detail.into()))
    }
}
