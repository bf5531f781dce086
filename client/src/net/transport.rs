//! HTTP transport seam.
//!
//! Client-side (hydrate): `BrowserTransport` sends through `gloo-net`.
//! Server-side (SSR): the same type reports a transport error, since data is
//! only fetched after hydration. Tests supply their own transport.

#![allow(clippy::unused_async)]

use std::sync::Arc;

use super::error::FetchError;
use super::request::HttpRequest;
#[cfg(feature = "hydrate")]
use super::request::Method;

/// Raw status + body of a settled HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw response.
///
/// Futures run on the browser event loop and need not be `Send`; the transport
/// itself is shared through context, so the handle is `Send + Sync`.
#[async_trait::async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] when no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FetchError>;
}

/// Transport handle provided through Leptos context.
pub type SharedTransport = Arc<dyn HttpTransport>;

/// `fetch`-backed transport for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&request.url),
                Method::Post => gloo_net::http::Request::post(&request.url),
                Method::Put => gloo_net::http::Request::put(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let outgoing = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| FetchError::Transport(e.to_string()))?;
            let resp = outgoing
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| FetchError::Transport(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(FetchError::Transport("not available on server".to_owned()))
        }
    }
}
