//! Scripted in-memory transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::mpsc::UnboundedReceiver;

use super::client::{event_channel, ApiClient, ApiEvent};
use super::transport::{Http, HttpRequest, HttpResponse, Transport};
use super::error::ApiError;
use crate::services::session::SessionStore;

pub const TEST_BASE_URL: &str = "http://backend.test";

#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.replies.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(&self, error: ApiError) -> &Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.seen.lock().unwrap().last().cloned().expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.seen.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_string())))
    }
}

pub struct Harness {
    pub transport: Arc<MockTransport>,
    pub session: SessionStore,
    pub client: ApiClient,
    pub events: UnboundedReceiver<ApiEvent>,
}

impl Harness {
    pub fn new() -> Self {
        let transport = MockTransport::new();
        let session = SessionStore::in_memory();
        let (sender, stream) = event_channel();
        let http = Http::new(transport.clone(), Duration::from_secs(10));
        let client = ApiClient::new(http, TEST_BASE_URL, session.clone(), sender);
        let events = stream.take().expect("fresh stream");
        Self {
            transport,
            session,
            client,
            events,
        }
    }

    /// Events emitted so far, without waiting.
    pub fn drain_events(&mut self) -> Vec<ApiEvent> {
        let mut drained = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            drained.push(event);
        }
        drained
    }
}
