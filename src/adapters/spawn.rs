use crate::domain::dispatch::PendingDispatch;
use crate::ports::LoggerPort;

/// Drives a dispatch nobody is waiting on, logging a failed send.
///
/// In the browser the future is handed to the microtask queue. Native sends
/// run on their own short-lived thread so the reporting thread, which may be
/// unwinding from a panic, never waits on the network.
#[cfg(target_arch = "wasm32")]
pub fn spawn_detached(pending: PendingDispatch, logger: &'static dyn LoggerPort) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = pending.await {
            logger.warn(&format!("Loggly dispatch failed: {e}"));
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_detached(
    pending: PendingDispatch,
    logger: &'static dyn LoggerPort,
) -> Option<std::thread::JoinHandle<()>> {
    let spawned = std::thread::Builder::new()
        .name("loggly-dispatch".to_string())
        .spawn(move || {
            if let Err(e) = futures::executor::block_on(pending) {
                logger.warn(&format!("Loggly dispatch failed: {e}"));
            }
        });

    match spawned {
        Ok(handle) => Some(handle),
        Err(e) => {
            logger.warn(&format!("Could not start Loggly dispatch thread: {e}"));
            None
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::adapters::logger;
    use crate::domain::error::TrackError;
    use crate::domain::event::DeliveryReceipt;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_runs_off_the_calling_thread() {
        let caller = std::thread::current().id();
        let ran = Arc::new(AtomicBool::new(false));

        let flag = ran.clone();
        let pending: PendingDispatch = Box::pin(async move {
            assert_ne!(std::thread::current().id(), caller);
            flag.store(true, Ordering::SeqCst);
            Ok(DeliveryReceipt { status: 200 })
        });

        spawn_detached(pending, logger()).unwrap().join().unwrap();
        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_failed_send_is_contained() {
        let pending: PendingDispatch = Box::pin(async { Err(TrackError::transport("offline")) });
        assert!(spawn_detached(pending, logger()).unwrap().join().is_ok());
    }
}
