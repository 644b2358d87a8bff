use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use super::{HttpClient, HttpRequest, HttpResponse};
use crate::error::ApiError;

/// [`HttpClient`] over the browser `fetch` API.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        if request.include_credentials {
            init.set_credentials(RequestCredentials::Include);
        }
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let js_request = Request::new_with_str_and_init(&request.url, &init)
            .map_err(|e| ApiError::Browser(js_error_message(&e)))?;
        for (name, value) in &request.headers {
            js_request
                .headers()
                .set(name, value)
                .map_err(|e| ApiError::Browser(js_error_message(&e)))?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Browser("no window".to_string()))?;

        let response: Response = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(|e| ApiError::Network(js_error_message(&e)))?
            .dyn_into()
            .map_err(|_| ApiError::Browser("fetch did not resolve to a Response".to_string()))?;

        let text_promise = response
            .text()
            .map_err(|e| ApiError::Browser(js_error_message(&e)))?;
        let body = JsFuture::from(text_promise)
            .await
            .map_err(|e| ApiError::Network(js_error_message(&e)))?
            .as_string()
            .unwrap_or_default();

        Ok(HttpResponse {
            status: response.status(),
            body,
        })
    }
}

/// Best-effort readable text for a rejected promise or thrown value.
fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
