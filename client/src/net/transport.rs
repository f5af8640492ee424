//! `fetch`-backed transport for the shared gateway.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call fails, since these endpoints are only
//! meaningful in the browser.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use gateway::{HttpMethod, RequestConfig, Transport, TransportError, TransportResponse};

/// Zero-sized; all state lives in the request.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "csr")]
fn gloo_method(method: HttpMethod) -> gloo_net::http::Method {
    use gloo_net::http::Method;
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: &RequestConfig) -> Result<TransportResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            let url = request.full_url();
            log::trace!("fetch {} {url}", request.method);
            let mut builder = gloo_net::http::RequestBuilder::new(&url).method(gloo_method(request.method));
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if request.with_credentials {
                builder = builder.credentials(web_sys::RequestCredentials::Include);
            }
            let outgoing = match &request.body {
                Some(body) => builder.body(body.to_string()),
                None => builder.build(),
            }
            .map_err(|e| TransportError(e.to_string()))?;

            let resp = outgoing
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
            Ok(TransportResponse::new(status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable_outside_browser(request.method))
        }
    }
}

#[cfg(any(test, not(feature = "csr")))]
fn unavailable_outside_browser(method: HttpMethod) -> TransportError {
    TransportError(format!("{method} not available outside the browser"))
}
