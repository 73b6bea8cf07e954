use super::event::UncaughtError;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub type ErrorObserver = Arc<dyn Fn(&UncaughtError) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Observers notified by the single installed error handler.
pub struct ErrorObservers {
    next_id: AtomicU64,
    observers: RwLock<Vec<(ObserverId, ErrorObserver)>>,
}

impl Default for ErrorObservers {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorObservers {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            observers: RwLock::new(Vec::new()),
        }
    }

    pub fn register(&self, observer: ErrorObserver) -> ObserverId {
        let id = ObserverId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.write().push((id, observer));
        id
    }

    pub fn unregister(&self, id: ObserverId) -> bool {
        let mut observers = self.observers.write();
        let before = observers.len();
        observers.retain(|(observer_id, _)| *observer_id != id);
        observers.len() != before
    }

    /// Calls every observer in registration order.
    ///
    /// The list is snapshotted first so an observer may register or
    /// unregister without deadlocking.
    pub fn notify(&self, error: &UncaughtError) {
        let snapshot: Vec<ErrorObserver> = self
            .observers
            .read()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();

        for observer in snapshot {
            observer(error);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.read().is_empty()
    }
}
