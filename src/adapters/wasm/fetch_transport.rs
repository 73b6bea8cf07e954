use crate::domain::error::TrackError;
use crate::domain::event::{DeliveryReceipt, OutgoingRequest};
use crate::global::get_global_scope;
use crate::ports::TransportPort;
use async_trait::async_trait;
use js_sys::Promise;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{DedicatedWorkerGlobalScope, Request, RequestInit, RequestMode, Response, Window};

/// Transport issuing the POST through `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }

    fn fetch(&self, request: &Request) -> Result<Promise, TrackError> {
        let scope = get_global_scope()?;
        if let Ok(worker) = scope.clone().dyn_into::<DedicatedWorkerGlobalScope>() {
            Ok(worker.fetch_with_request(request))
        } else if let Ok(window) = scope.dyn_into::<Window>() {
            Ok(window.fetch_with_request(request))
        } else {
            Err(TrackError::environment("fetch is not available"))
        }
    }
}

#[async_trait(?Send)]
impl TransportPort for FetchTransport {
    async fn post(&self, request: &OutgoingRequest) -> Result<DeliveryReceipt, TrackError> {
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_mode(RequestMode::Cors);
        init.set_body(&JsValue::from_str(&request.body));

        let js_request = Request::new_with_str_and_init(&request.url, &init)
            .map_err(|e| TrackError::transport(format!("Invalid request: {:?}", e)))?;
        js_request
            .headers()
            .set("Content-Type", request.content_type)
            .map_err(|e| TrackError::transport(format!("Invalid header: {:?}", e)))?;

        let response = JsFuture::from(self.fetch(&js_request)?)
            .await
            .map_err(|e| TrackError::transport(format!("{:?}", e)))?;

        let response: Response = response
            .dyn_into()
            .map_err(|_| TrackError::transport("fetch did not resolve to a Response"))?;

        Ok(DeliveryReceipt {
            status: response.status(),
        })
    }
}
