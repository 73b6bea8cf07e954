use crate::domain::error::TrackError;
use crate::domain::error_hook::{ErrorObserver, ErrorObservers, ObserverId};
use crate::domain::event::UncaughtError;
use crate::global::window;
use crate::ports::ErrorHookPort;
use js_sys::{Array, Function};
use once_cell::sync::Lazy;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

type OnErrorHandler = dyn FnMut(JsValue, JsValue, JsValue, JsValue, JsValue) -> JsValue;

static OBSERVERS: Lazy<ErrorObservers> = Lazy::new(ErrorObservers::new);

struct InstalledHandler {
    handler: Closure<OnErrorHandler>,
    previous: Option<Function>,
}

thread_local! {
    static INSTALLED: RefCell<Option<InstalledHandler>> = const { RefCell::new(None) };
}

/// Error hook backed by `window.onerror`.
///
/// The installed handler reports to every subscribed observer, then calls the
/// handler that was there before with the original arguments and returns its
/// result so default-suppression keeps working.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowErrorHook;

impl WindowErrorHook {
    pub fn new() -> Self {
        Self
    }
}

fn optional_string(value: &JsValue) -> Option<String> {
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

fn optional_u32(value: &JsValue) -> Option<u32> {
    value.as_f64().filter(|n| *n >= 0.0).map(|n| n as u32)
}

pub fn uncaught_from_js(message: &JsValue, source: &JsValue, lineno: &JsValue, colno: &JsValue) -> UncaughtError {
    UncaughtError {
        message: optional_string(message).unwrap_or_default(),
        url: optional_string(source),
        line: optional_u32(lineno),
        column: optional_u32(colno),
    }
}

impl ErrorHookPort for WindowErrorHook {
    fn install(&self) -> Result<(), TrackError> {
        if self.is_installed() {
            return Ok(());
        }

        let window = window()?;
        let previous = window.onerror();
        let chained = previous.clone();

        let handler = Closure::wrap(Box::new(
            move |message: JsValue, source: JsValue, lineno: JsValue, colno: JsValue, error: JsValue| {
                OBSERVERS.notify(&uncaught_from_js(&message, &source, &lineno, &colno));

                let Some(previous) = &chained else {
                    return JsValue::UNDEFINED;
                };

                let args = Array::new();
                for arg in [message, source, lineno, colno, error] {
                    args.push(&arg);
                }
                let this = web_sys::window().map(JsValue::from).unwrap_or(JsValue::UNDEFINED);
                previous.apply(&this, &args).unwrap_or(JsValue::UNDEFINED)
            },
        ) as Box<OnErrorHandler>);

        window.set_onerror(Some(handler.as_ref().unchecked_ref()));

        INSTALLED.with(|installed| {
            *installed.borrow_mut() = Some(InstalledHandler { handler, previous });
        });

        Ok(())
    }

    /// Detaches the handler only while it is still `window.onerror`. A script
    /// that replaced it afterwards may be chaining to it, so in that case the
    /// handler stays in place and `false` is returned.
    fn uninstall(&self) -> Result<bool, TrackError> {
        INSTALLED.with(|installed| -> Result<bool, TrackError> {
            let mut installed = installed.borrow_mut();
            let Some(current) = installed.as_ref() else {
                return Ok(false);
            };

            let window = window()?;

            let ours: &Function = current.handler.as_ref().unchecked_ref();
            if window.onerror().as_ref() != Some(ours) {
                return Ok(false);
            }

            if let Some(removed) = installed.take() {
                window.set_onerror(removed.previous.as_ref());
            }
            Ok(true)
        })
    }

    fn is_installed(&self) -> bool {
        INSTALLED.with(|installed| installed.borrow().is_some())
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
