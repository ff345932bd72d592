use super::HttpReply;
use crate::config::ApiConfig;
use crate::error::RequestError;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Browser transport over `fetch`. Same contract as the native one, async.
#[derive(Clone)]
pub struct FetchTransport {
    config: ApiConfig,
}

impl FetchTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub async fn post_json(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<HttpReply, RequestError> {
        let fail = |message: String| RequestError::Transport {
            endpoint: endpoint.to_string(),
            message,
        };

        let url = self.config.url_for(endpoint);
        let payload_json = serde_json::to_string(body)
            .map_err(|err| fail(format!("could not serialize payload: {err}")))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&payload_json));

        let window = web_sys::window().ok_or_else(|| fail("no window in this context".into()))?;

        let request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|err| fail(format!("could not build request: {err:?}")))?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|err| fail(format!("could not set headers: {err:?}")))?;

        log::debug!("POST {url}");
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|err| fail(format!("fetch failed: {err:?}")))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|_| fail("fetch did not return a Response".into()))?;

        let text_js = match response.text() {
            Ok(promise) => JsFuture::from(promise).await,
            Err(err) => Err(err),
        };
        let text = text_js
            .and_then(|v| {
                v.as_string()
                    .ok_or_else(|| JsValue::from_str("response.text() was not a string"))
            })
            .map_err(|err| fail(format!("could not read body: {err:?}")))?;

        Ok(HttpReply {
            status: response.status(),
            body: text,
        })
    }
}
