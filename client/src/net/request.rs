//! Request description and the single place `Authorization` is formatted.
//!
//! DESIGN
//! ======
//! Backend routes disagree on the header shape: some expect the bare token,
//! others `Bearer <token>`. Each call site names its `AuthScheme` once on the
//! `ResourceRequest`; `authorize` is the only code that turns a token into a
//! header value.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde_json::Value;

use super::error::GENERIC_FAILURE_MESSAGE;

/// How the session token is written into the `Authorization` header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthScheme {
    /// The token verbatim.
    Raw,
    /// `Bearer <token>`.
    #[default]
    Bearer,
}

impl AuthScheme {
    pub fn header_value(self, token: &str) -> String {
        match self {
            Self::Raw => token.to_owned(),
            Self::Bearer => format!("Bearer {token}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// A call site's description of one REST request, before a token is attached.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceRequest {
    pub method: Method,
    pub url: String,
    pub scheme: AuthScheme,
    pub body: Option<Value>,
    /// Shown when a failed response carries no `message`.
    pub fallback_message: String,
}

impl ResourceRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            scheme: AuthScheme::default(),
            body: None,
            fallback_message: GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }

    pub fn put(url: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Put, body: Some(body), ..Self::get(url) }
    }

    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, body: Some(body), ..Self::get(url) }
    }

    #[must_use]
    pub fn scheme(mut self, scheme: AuthScheme) -> Self {
        self.scheme = scheme;
        self
    }

    #[must_use]
    pub fn fallback(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// Attach the token (if any) and produce the wire request.
    pub fn authorize(&self, token: Option<&str>) -> HttpRequest {
        let mut headers = Vec::with_capacity(2);
        if let Some(token) = token {
            headers.push(("Authorization".to_owned(), self.scheme.header_value(token)));
        }
        if self.body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        HttpRequest {
            method: self.method,
            url: self.url.clone(),
            headers,
            body: self.body.as_ref().map(Value::to_string),
        }
    }
}

/// Fully formed request handed to an `HttpTransport`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
