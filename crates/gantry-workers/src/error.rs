use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A blocked lifecycle wait that can never complete because the peer
    /// endpoint is gone.
    #[error("{context} interrupted: peer endpoint dropped")]
    WaitInterrupted { context: &'static str },
    #[error("failed to spawn worker thread `{name}`: {source}")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("worker thread `{name}` panicked")]
    WorkerPanicked { name: String },
}

impl Error {
    pub fn wait_interrupted(context: &'static str) -> Self {
        Self::WaitInterrupted { context }
    }

    pub fn spawn(name: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            name: name.into(),
            source,
        }
    }

    pub fn worker_panicked(name: impl Into<String>) -> Self {
        Self::WorkerPanicked { name: name.into() }
    }

    pub fn is_wait_interrupted(&self) -> bool {
        matches!(self, Self::WaitInterrupted { .. })
    }
}
