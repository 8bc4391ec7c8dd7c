//! Counted "processing" lock for the busy indicator.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Tracks in-flight operations that should show a busy indicator.
///
/// The lock is a counter rather than a flag because nothing de-duplicates
/// requests: two overlapping asks each hold the lock, and the indicator stays
/// up until both resolve. Guards release on drop, so every exit path,
/// including `?` returns and aborts, hides the indicator.
#[derive(Debug, Clone, Default)]
pub struct ProcessingLock {
    active: Arc<AtomicUsize>,
}

impl ProcessingLock {
    /// Creates an idle lock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an operation in flight until the returned guard drops.
    pub fn acquire(&self) -> ProcessingGuard {
        self.active.fetch_add(1, Ordering::Relaxed);
        ProcessingGuard {
            active: Arc::clone(&self.active),
        }
    }

    /// True while any operation is in flight.
    pub fn is_busy(&self) -> bool {
        self.active.load(Ordering::Relaxed) > 0
    }

    /// Number of operations currently in flight.
    pub fn in_flight(&self) -> usize {
        self.active.load(Ordering::Relaxed)
    }
}

/// RAII guard for one in-flight operation.
#[derive(Debug)]
pub struct ProcessingGuard {
    active: Arc<AtomicUsize>,
}

impl Drop for ProcessingGuard {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_release_on_drop() {
        let lock = ProcessingLock::new();
        assert!(!lock.is_busy());
        {
            let _guard = lock.acquire();
            assert!(lock.is_busy());
        }
        assert!(!lock.is_busy());
    }

    #[test]
    fn overlapping_operations_count() {
        let lock = ProcessingLock::new();
        let first = lock.acquire();
        let second = lock.acquire();
        assert_eq!(lock.in_flight(), 2);
        drop(first);
        assert!(lock.is_busy(), "indicator stays up until both resolve");
        drop(second);
        assert!(!lock.is_busy());
    }

    #[test]
    fn guard_release_on_early_return() {
        fn failing(lock: &ProcessingLock) -> Result<(), ()> {
            let _guard = lock.acquire();
            Err(())?;
            unreachable!()
        }
        let lock = ProcessingLock::new();
        assert!(failing(&lock).is_err());
        assert!(!lock.is_busy());
    }
}
