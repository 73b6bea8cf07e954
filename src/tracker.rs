/// Loggly tracker - ties the config store, the dispatcher and the global
/// error hook together behind one handle.
use crate::adapters::spawn_detached;
use crate::domain::config::{self, LogglyConfig};
use crate::domain::dispatch::{Dispatcher, PendingDispatch};
use crate::domain::error::TrackError;
use crate::domain::error_hook::ObserverId;
use crate::domain::event::{Payload, UncaughtError};
use crate::platform::Platform;
use crate::ports::LoggerPort;
use parking_lot::Mutex;
use std::sync::Arc;

pub struct LogglyTracker {
    platform: Platform,
    dispatcher: Arc<Dispatcher>,
    error_observer: Mutex<Option<ObserverId>>,
}

impl LogglyTracker {
    /// Creates a tracker, merging whatever configuration is already persisted
    /// and assigning a session identifier if there is none yet.
    pub fn new(platform: Platform) -> Result<Self, TrackError> {
        let configuration = config::configure(&platform, LogglyConfig::default())?;

        let tracker = Self {
            dispatcher: Arc::new(Dispatcher::new(&platform, configuration.clone())),
            platform,
            error_observer: Mutex::new(None),
        };
        tracker.sync_error_capture(&configuration)?;

        Ok(tracker)
    }

    /// Merges `overrides` over the persisted configuration, persists the
    /// result and hands it to the dispatcher.
    pub fn configure(&self, overrides: LogglyConfig) -> Result<LogglyConfig, TrackError> {
        let configuration = config::configure(&self.platform, overrides)?;
        self.dispatcher.update_config(configuration.clone());
        self.sync_error_capture(&configuration)?;
        Ok(configuration)
    }

    /// The record currently persisted in the store.
    pub fn read_config(&self) -> Result<LogglyConfig, TrackError> {
        config::read_config(&self.platform)
    }

    /// The configuration the dispatcher sends with.
    pub fn config(&self) -> LogglyConfig {
        self.dispatcher.config()
    }

    pub fn session_id(&self) -> Option<String> {
        self.dispatcher.config().session_id().map(str::to_string)
    }

    pub fn push(&self, payload: impl Into<Payload>) -> Result<PendingDispatch, TrackError> {
        self.dispatcher.push(payload.into())
    }

    /// Sends an uncaught error event without waiting for the result.
    pub fn report_error(&self, error: &UncaughtError) {
        report(&self.dispatcher, self.platform.logger(), error);
    }

    pub fn is_capturing_errors(&self) -> bool {
        self.error_observer.lock().is_some()
    }

    /// Stops this tracker's error capture.
    ///
    /// The shared handler serves every tracker on the page, so it is only
    /// removed, and the environment's previous handler restored, once no
    /// observer is left. Returns whether it was removed.
    pub fn uninstall_error_hook(&self) -> Result<bool, TrackError> {
        let hook = self.platform.error_hook();
        if let Some(id) = self.error_observer.lock().take() {
            hook.unsubscribe(id);
        }

        if hook.has_observers() {
            return Ok(false);
        }
        hook.uninstall()
    }

    fn sync_error_capture(&self, configuration: &LogglyConfig) -> Result<(), TrackError> {
        let hook = self.platform.error_hook();
        let mut observer = self.error_observer.lock();

        if configuration.sends_console_errors() {
            hook.install()?;
            if observer.is_none() {
                let dispatcher = self.dispatcher.clone();
                let logger = self.platform.logger();
                *observer = Some(hook.subscribe(Arc::new(move |error: &UncaughtError| {
                    report(&dispatcher, logger, error);
                })));
            }
        } else if let Some(id) = observer.take() {
            hook.unsubscribe(id);
        }

        Ok(())
    }
}

impl Drop for LogglyTracker {
    fn drop(&mut self) {
        if let Some(id) = self.error_observer.get_mut().take() {
            self.platform.error_hook().unsubscribe(id);
        }
    }
}

fn report(dispatcher: &Dispatcher, logger: &'static dyn LoggerPort, error: &UncaughtError) {
    match dispatcher.push(error.to_payload()) {
        Ok(pending) => {
            spawn_detached(pending, logger);
        }
        Err(e) => logger.warn(&format!("Dropped uncaught error report: {e}")),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::adapters::native::{MemoryStore, RecordingTransport, StaticLocation};
    use crate::domain::endpoint::Scheme;
    use crate::domain::error_hook::{ErrorObserver, ErrorObservers};
    use crate::ports::ErrorHookPort;
    use futures::executor::block_on;
    use serde_json::{json, Value};
    use crate::domain::event::OutgoingRequest;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct FakeHook {
        observers: ErrorObservers,
        installed: AtomicBool,
        installs: AtomicUsize,
    }

    impl FakeHook {
        fn raise(&self, error: &UncaughtError) {
            if self.installed.load(Ordering::SeqCst) {
                self.observers.notify(error);
            }
        }
    }

    impl ErrorHookPort for FakeHook {
        fn install(&self) -> Result<(), TrackError> {
            if !self.installed.swap(true, Ordering::SeqCst) {
                self.installs.fetch_add(1, Ordering::SeqCst);
            }
            Ok(())
        }

        fn uninstall(&self) -> Result<bool, TrackError> {
            Ok(self.installed.swap(false, Ordering::SeqCst))
        }

        fn is_installed(&self) -> bool {
            self.installed.load(Ordering::SeqCst)
        }

        fn subscribe(&self, observer: ErrorObserver) -> ObserverId {
            self.observers.register(observer)
        }

        fn unsubscribe(&self, id: ObserverId) -> bool {
            self.observers.unregister(id)
        }

        fn has_observers(&self) -> bool {
            !self.observers.is_empty()
        }
    }

    struct Harness {
        tracker: LogglyTracker,
        transport: Arc<RecordingTransport>,
        hook: Arc<FakeHook>,
    }

    fn harness() -> Harness {
        harness_with_hook(Arc::new(FakeHook::default()))
    }

    fn harness_with_hook(hook: Arc<FakeHook>) -> Harness {
        let transport = Arc::new(RecordingTransport::new());
        let platform = Platform::new()
            .with_storage(Arc::new(MemoryStore::new()))
            .with_transport(transport.clone())
            .with_location(Arc::new(StaticLocation::new(Scheme::Https, "app.example.com")))
            .with_error_hook(hook.clone());

        Harness {
            tracker: LogglyTracker::new(platform).unwrap(),
            transport,
            hook,
        }
    }

    // Error reports are sent from a dispatch thread.
    fn wait_for_requests(transport: &RecordingTransport, count: usize) -> Vec<OutgoingRequest> {
        for _ in 0..200 {
            let sent = transport.requests();
            if sent.len() >= count {
                return sent;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        transport.requests()
    }

    #[test]
    fn test_new_assigns_session_and_captures_errors_by_default() {
        let h = harness();
        assert_eq!(h.tracker.session_id().map(|id| id.len()), Some(36));
        assert!(h.tracker.is_capturing_errors());
        assert!(h.hook.is_installed());
    }

    #[test]
    fn test_repeated_configure_installs_once() {
        let h = harness();
        for _ in 0..3 {
            h.tracker
                .configure(LogglyConfig::default().with_console_errors(true))
                .unwrap();
        }

        assert_eq!(h.hook.installs.load(Ordering::SeqCst), 1);
        assert_eq!(h.hook.observers.len(), 1);
    }

    #[test]
    fn test_disabling_capture_unsubscribes() {
        let h = harness();
        h.tracker
            .configure(LogglyConfig::default().with_key("k").with_console_errors(false))
            .unwrap();

        assert!(!h.tracker.is_capturing_errors());
        assert!(h.hook.observers.is_empty());

        h.hook.raise(&UncaughtError::new("ignored"));
        assert!(h.transport.requests().is_empty());
    }

    #[test]
    fn test_raised_error_is_dispatched() {
        let h = harness();
        h.tracker
            .configure(LogglyConfig::default().with_key("ABC").with_tag("web"))
            .unwrap();

        h.hook.raise(&UncaughtError::new("boom").at("https://app.example.com/main.js", 1, 2));

        let sent = wait_for_requests(&h.transport, 1);
        assert_eq!(sent.len(), 1);
        let body: Value = serde_json::from_str(&sent[0].body).unwrap();
        assert_eq!(body["category"], json!("BrowserJsException"));
        assert_eq!(body["exception"]["message"], json!("boom"));
        assert_eq!(body["exception"]["lineno"], json!(1));
        assert_eq!(body["sessionId"], json!(h.tracker.session_id().unwrap()));
    }

    #[test]
    fn test_raised_error_without_key_sends_nothing() {
        let h = harness();
        h.hook.raise(&UncaughtError::new("boom"));
        assert!(h.transport.requests().is_empty());
    }

    #[test]
    fn test_push_text() {
        let h = harness();
        h.tracker
            .configure(LogglyConfig::default().with_key("ABC").with_tag("web"))
            .unwrap();

        block_on(h.tracker.push("hello").unwrap()).unwrap();

        let sent = h.transport.requests();
        let body: Value = serde_json::from_str(&sent[0].body).unwrap();
        assert_eq!(
            body,
            json!({ "text": "hello", "sessionId": h.tracker.session_id().unwrap() })
        );
    }

    #[test]
    fn test_configure_refreshes_dispatcher() {
        let h = harness();
        let merged = h
            .tracker
            .configure(LogglyConfig::default().with_key("ABC").with_domain_proxy(true))
            .unwrap();

        assert_eq!(h.tracker.config(), merged);
        assert_eq!(h.tracker.read_config().unwrap(), merged);

        block_on(h.tracker.push("x").unwrap()).unwrap();
        assert_eq!(
            h.transport.requests()[0].url,
            "https://app.example.com/loggly/inputs/ABC"
        );
    }

    #[test]
    fn test_uninstall_error_hook() {
        let h = harness();
        assert!(h.tracker.uninstall_error_hook().unwrap());
        assert!(!h.tracker.is_capturing_errors());
        assert!(!h.hook.is_installed());
        assert!(h.hook.observers.is_empty());
    }

    #[test]
    fn test_uninstall_leaves_other_trackers_capturing() {
        let hook = Arc::new(FakeHook::default());
        let first = harness_with_hook(hook.clone());
        let second = harness_with_hook(hook.clone());
        for h in [&first, &second] {
            h.tracker
                .configure(LogglyConfig::default().with_key("ABC"))
                .unwrap();
        }
        assert_eq!(hook.observers.len(), 2);

        assert!(!first.tracker.uninstall_error_hook().unwrap());
        assert!(!first.tracker.is_capturing_errors());
        assert!(second.tracker.is_capturing_errors());
        assert!(hook.is_installed());

        hook.raise(&UncaughtError::new("still seen"));
        assert_eq!(wait_for_requests(&second.transport, 1).len(), 1);
        assert!(first.transport.requests().is_empty());

        assert!(second.tracker.uninstall_error_hook().unwrap());
        assert!(!hook.is_installed());
    }

    #[test]
    fn test_drop_unsubscribes() {
        let h = harness();
        let hook = h.hook.clone();
        drop(h.tracker);
        assert!(hook.observers.is_empty());
    }
}
