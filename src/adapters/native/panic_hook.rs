use crate::domain::error::TrackError;
use crate::domain::error_hook::{ErrorObserver, ErrorObservers, ObserverId};
use crate::domain::event::UncaughtError;
use crate::ports::ErrorHookPort;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;

type Hook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

static OBSERVERS: Lazy<ErrorObservers> = Lazy::new(ErrorObservers::new);

/// Hook that was in place before ours; `Some` exactly while installed.
static PREVIOUS: Lazy<Mutex<Option<Arc<Hook>>>> = Lazy::new(|| Mutex::new(None));

/// Error hook backed by the process panic hook.
///
/// One wrapper is installed per process; it reports the panic to every
/// subscribed observer and then runs the hook it replaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicHook;

impl PanicHook {
    pub fn new() -> Self {
        Self
    }
}

pub fn uncaught_from_panic(info: &PanicHookInfo<'_>) -> UncaughtError {
    let payload = info.payload();
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unspecified panic".to_string()
    };

    let mut error = UncaughtError::new(message);
    if let Some(location) = info.location() {
        error = error.at(location.file(), location.line(), location.column());
    }
    error
}

impl ErrorHookPort for PanicHook {
    fn install(&self) -> Result<(), TrackError> {
        let mut previous = PREVIOUS.lock();
        if previous.is_some() {
            return Ok(());
        }

        if std::thread::panicking() {
            return Err(TrackError::error_hook(
                "Cannot replace the panic hook while panicking",
            ));
        }

        let chained: Arc<Hook> = Arc::new(panic::take_hook());
        *previous = Some(chained.clone());

        panic::set_hook(Box::new(move |info| {
            OBSERVERS.notify(&uncaught_from_panic(info));
            chained(info);
        }));

        Ok(())
    }

    fn uninstall(&self) -> Result<bool, TrackError> {
        let mut previous = PREVIOUS.lock();
        let Some(chained) = previous.take() else {
            return Ok(false);
        };

        if std::thread::panicking() {
            *previous = Some(chained);
            return Err(TrackError::error_hook(
                "Cannot restore the panic hook while panicking",
            ));
        }

        drop(panic::take_hook());
        panic::set_hook(Box::new(move |info| chained(info)));

        Ok(true)
    }

    fn is_installed(&self) -> bool {
        PREVIOUS.lock().is_some()
    }

    fn subscribe(&self, observer: ErrorObserver) -> ObserverId {
        OBSERVERS.register(observer)
    }

    fn unsubscribe(&self, id: ObserverId) -> bool {
        OBSERVERS.unregister(id)
    }

    fn has_observers(&self) -> bool {
        !OBSERVERS.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // The panic hook is process-global; keep every install/uninstall in one
    // test so parallel tests never observe a half-configured hook.
    #[test]
    fn test_install_notify_and_uninstall() {
        let hook = PanicHook::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let messages = Arc::new(Mutex::new(Vec::new()));

        let counter = calls.clone();
        let seen = messages.clone();
        let id = hook.subscribe(Arc::new(move |error: &UncaughtError| {
            counter.fetch_add(1, Ordering::SeqCst);
            seen.lock().push(error.message.clone());
        }));

        hook.install().unwrap();
        hook.install().unwrap();
        assert!(hook.is_installed());

        let result = std::thread::spawn(|| panic!("panic hook test")).join();
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*messages.lock(), vec!["panic hook test".to_string()]);

        assert!(hook.unsubscribe(id));
        assert!(hook.uninstall().unwrap());
        assert!(!hook.uninstall().unwrap());
        assert!(!hook.is_installed());

        let result = std::thread::spawn(|| panic!("after uninstall")).join();
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
