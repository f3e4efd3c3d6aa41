use std::sync::{Arc, Mutex};

/// Last-write-wins slot for a worker's most recent outcome.
///
/// Both operations are total: `deliver` never waits for a reader and
/// `current` never waits for a writer. There is no handshake; a delivery
/// that nobody reads is simply replaced by the next one. Cloning the cell
/// yields another handle to the same slot.
#[derive(Debug)]
pub struct ResultCell<T> {
    slot: Arc<Mutex<Option<T>>>,
}

impl<T> Clone for ResultCell<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Default for ResultCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResultCell<T> {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Replaces the stored value with `value`.
    ///
    /// A poisoned slot still holds the last delivered value, so recovering
    /// it keeps the operation total.
    pub fn deliver(&self, value: T) {
        let mut slot = match self.slot.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = Some(value);
    }
}

impl<T: Clone> ResultCell<T> {
    /// Snapshot of the most recent delivery, `None` before the first one.
    ///
    /// Reading never consumes: repeated calls return the same value until
    /// a newer one is delivered.
    pub fn current(&self) -> Option<T> {
        let slot = match self.slot.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        slot.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::ResultCell;

    #[test]
    fn absent_until_first_delivery() {
        let cell: ResultCell<u32> = ResultCell::new();
        assert_eq!(cell.current(), None);

        cell.deliver(7);
        assert_eq!(cell.current(), Some(7));
    }

    #[test]
    fn repeated_reads_return_latest() {
        let cell = ResultCell::new();
        cell.deliver("first");
        assert_eq!(cell.current(), Some("first"));
        assert_eq!(cell.current(), Some("first"));

        cell.deliver("second");
        assert_eq!(cell.current(), Some("second"));
        assert_eq!(cell.current(), Some("second"));
    }

    #[test]
    fn handles_share_one_slot() {
        let cell = ResultCell::new();
        let writer = cell.clone();
        let worker = thread::spawn(move || {
            writer.deliver(41);
            writer.deliver(42);
        });
        worker.join().expect("join worker");
        assert_eq!(cell.current(), Some(42));
    }
}
