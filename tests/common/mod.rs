//! Shared fixtures for integration tests.

#![allow(dead_code)]

use bytes::Bytes;
use document_atom_sdk::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use document_atom_sdk::{DocumentAtomClient, DocumentAtomClientBuilder};
use reqwest::header::HeaderMap;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const TEST_ENDPOINT: &str = "http://test-api.com";

/// Scripted outcome of one `send` call.
pub enum Reply {
    Status(u16, &'static str),
    Fail(&'static str),
}

/// In-memory transport that records every request and replays scripted replies.
///
/// When the script runs out, the last reply is repeated.
pub struct FakeTransport {
    replies: Mutex<VecDeque<Reply>>,
    last: Mutex<Option<Reply>>,
    pub requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new(replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            last: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn ok(body: &'static str) -> Arc<Self> {
        Self::new(vec![Reply::Status(200, body)])
    }

    pub fn failing() -> Arc<Self> {
        Self::new(vec![Reply::Fail("connection refused")])
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

fn render(reply: &Reply) -> Result<HttpResponse, TransportError> {
    match reply {
        Reply::Status(status, body) => Ok(HttpResponse {
            status: *status,
            headers: HeaderMap::new(),
            body: Bytes::from_static(body.as_bytes()),
        }),
        Reply::Fail(msg) => Err(TransportError::Connect(msg.to_string())),
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self.replies.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        if let Some(reply) = next {
            *last = Some(reply);
        }
        render(last.as_ref().expect("FakeTransport has no replies"))
    }
}

/// Client against [`TEST_ENDPOINT`] backed by `transport`.
pub fn client_with(transport: Arc<FakeTransport>) -> Arc<DocumentAtomClient> {
    Arc::new(
        DocumentAtomClientBuilder::new()
            .endpoint(TEST_ENDPOINT)
            .transport(transport)
            .build()
            .unwrap(),
    )
}
