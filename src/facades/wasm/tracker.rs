use super::converters;
use crate::platform::Platform;
use crate::tracker::LogglyTracker;
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

/// JavaScript handle: `new LogglyTracker()`.
#[wasm_bindgen(js_name = LogglyTracker)]
pub struct WasmTracker {
    inner: LogglyTracker,
}

#[wasm_bindgen(js_class = LogglyTracker)]
impl WasmTracker {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmTracker, JsValue> {
        let inner = LogglyTracker::new(Platform::new())?;
        Ok(WasmTracker { inner })
    }

    /// Merges `overrides` into the persisted configuration.
    pub fn config(&self, overrides: JsValue) -> Result<(), JsValue> {
        let overrides = converters::js_value_to_config(overrides)?;
        self.inner.configure(overrides)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = readConfig)]
    pub fn read_config(&self) -> Result<JsValue, JsValue> {
        let config = self.inner.read_config()?;
        Ok(converters::config_to_js_value(&config)?)
    }

    /// Sends a string or an object. The returned promise resolves to the
    /// collector's HTTP status and may be ignored.
    pub fn push(&self, data: JsValue) -> Result<Promise, JsValue> {
        let payload = converters::js_value_to_payload(data)?;
        let pending = self.inner.push(payload)?;

        Ok(future_to_promise(async move {
            let receipt = pending.await?;
            Ok(JsValue::from(receipt.status))
        }))
    }

    #[wasm_bindgen(js_name = sessionId)]
    pub fn session_id(&self) -> Option<String> {
        self.inner.session_id()
    }

    #[wasm_bindgen(js_name = uninstallErrorHook)]
    pub fn uninstall_error_hook(&self) -> Result<bool, JsValue> {
        self.inner
            .uninstall_error_hook()
            .map_err(converters::to_js_error)
    }
}
