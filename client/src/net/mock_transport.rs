//! Scripted transport for tests.

use std::sync::Mutex;

use super::error::FetchError;
use super::request::HttpRequest;
use super::transport::{HttpResponse, HttpTransport};

/// Replies with scripted responses in send order and records every request.
pub(crate) struct MockTransport {
    responses: Mutex<Vec<Result<HttpResponse, FetchError>>>,
    sent: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub(crate) fn new(responses: Vec<Result<HttpResponse, FetchError>>) -> Self {
        Self { responses: Mutex::new(responses), sent: Mutex::new(Vec::new()) }
    }

    pub(crate) fn replying(status: u16, body: &str) -> Self {
        Self::new(vec![Ok(HttpResponse { status, body: body.to_owned() })])
    }

    pub(crate) fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait::async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        self.sent.lock().unwrap().push(request);
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Err(FetchError::Transport("no scripted response".into()))
        } else {
            responses.remove(0)
        }
    }
}
