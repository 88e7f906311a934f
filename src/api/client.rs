use std::sync::{Arc, Mutex};

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::transport::{join_url, Http, HttpRequest, HttpResponse, Method};
use super::error::ApiError;
use crate::services::session::SessionStore;

/// Shown in a blocking alert when the backend rate-limits us.
pub const RATE_LIMIT_NOTICE: &str =
    "Has excedido el límite de peticiones. Por favor, intenta más tarde.";

/// Cross-view conditions raised by the backend client. The transport only
/// reports them; the session watcher decides what the UI does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEvent {
    /// A response came back 401. Stored credentials are already cleared.
    Unauthenticated,
    /// A response came back 429.
    RateLimited,
}

impl ApiEvent {
    /// Route to force-navigate to, if any.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            ApiEvent::Unauthenticated => Some("/login"),
            ApiEvent::RateLimited => None,
        }
    }

    /// Text for a blocking notice, if any.
    pub fn blocking_notice(&self) -> Option<&'static str> {
        match self {
            ApiEvent::Unauthenticated => None,
            ApiEvent::RateLimited => Some(RATE_LIMIT_NOTICE),
        }
    }
}

/// Receiving half of the event channel. Cloneable so it can travel through
/// context; the receiver itself can be taken once.
#[derive(Clone)]
pub struct ApiEventStream {
    receiver: Arc<Mutex<Option<UnboundedReceiver<ApiEvent>>>>,
}

impl ApiEventStream {
    pub fn take(&self) -> Option<UnboundedReceiver<ApiEvent>> {
        self.receiver.lock().ok()?.take()
    }
}

pub fn event_channel() -> (UnboundedSender<ApiEvent>, ApiEventStream) {
    let (sender, receiver) = mpsc::unbounded();
    let stream = ApiEventStream {
        receiver: Arc::new(Mutex::new(Some(receiver))),
    };
    (sender, stream)
}

/// Backend client: base URL, default headers, bearer token injection and
/// 401/429 interception on top of `Http`.
#[derive(Clone)]
pub struct ApiClient {
    http: Http,
    base_url: String,
    session: SessionStore,
    events: UnboundedSender<ApiEvent>,
}

impl ApiClient {
    pub fn new(
        http: Http,
        base_url: impl Into<String>,
        session: SessionStore,
        events: UnboundedSender<ApiEvent>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            events,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying client without interceptors.
    pub fn http(&self) -> &Http {
        &self.http
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Request interceptor: default headers plus the bearer token when one
    /// is stored.
    pub fn prepare(&self, method: Method, path: &str, body: Option<&Value>) -> Result<HttpRequest, ApiError> {
        let mut request = HttpRequest::new(method, self.url(path))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("X-Requested-With", "XMLHttpRequest")
            .header("Cache-Control", "no-cache");

        if let Some(token) = self.session.token() {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        match body {
            Some(body) => request.json_body(body),
            None => Ok(request),
        }
    }

    /// Response interceptor. Runs for every response, whichever call made it.
    fn observe(&self, response: &HttpResponse) {
        match response.status {
            401 => {
                log::warn!("Backend answered 401; clearing stored session");
                self.session.clear();
                self.emit(ApiEvent::Unauthenticated);
            }
            429 => {
                log::warn!("Backend answered 429");
                self.emit(ApiEvent::RateLimited);
            }
            _ => {}
        }
    }

    fn emit(&self, event: ApiEvent) {
        if self.events.unbounded_send(event).is_err() {
            log::debug!("No listener for {:?}", event);
        }
    }

    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let request = self.prepare(method, path, body)?;
        let response = self.http.send(request).await?;
        self.observe(&response);
        response.into_result()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::Get, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize body: {}", e)))?;
        self.request(Method::Post, path, Some(&body)).await
    }
}
