use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::{Method as FetchMethod, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;

// ============================================================================
// Request / Response
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully prepared request, independent of the transport that sends it.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout: Duration,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    /// Set a header, replacing any existing value with the same name.
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn json_body<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let encoded = serde_json::to_string(body)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize body: {}", e)))?;
        self.body = Some(encoded);
        Ok(self.header("Content-Type", "application/json"))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Case-insensitive header lookup.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body; an empty body reads as JSON `null`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let text = if self.body.trim().is_empty() { "null" } else { self.body.as_str() };
        serde_json::from_str(text)
            .map_err(|e| ApiError::Decode(format!("Failed to deserialize response: {}", e)))
    }

    /// Decode a 2xx body, or turn any other status into `ApiError::Status`.
    pub fn into_result<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if self.is_success() {
            self.json()
        } else {
            Err(ApiError::from_response(self.status, &self.body))
        }
    }
}

// ============================================================================
// Transport
// ============================================================================

/// Sends one request and reports the raw response. Status codes are not
/// interpreted here.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Browser `fetch` via gloo-net. The request is aborted when its timeout
/// elapses.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let timeout_ms = u64::try_from(request.timeout.as_millis()).unwrap_or(u64::MAX);
        let controller = web_sys::AbortController::new()
            .map_err(|_| ApiError::Network("AbortController unavailable".to_string()))?;
        let signal = controller.signal();

        let method = match request.method {
            Method::Get => FetchMethod::GET,
            Method::Post => FetchMethod::POST,
        };
        let mut builder = RequestBuilder::new(&request.url)
            .method(method)
            .abort_signal(Some(&signal));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let exchange = Box::pin(async move {
            let response = prepared
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok::<_, ApiError>(HttpResponse { status, body })
        });
        let deadline = Box::pin(TimeoutFuture::new(u32::try_from(timeout_ms).unwrap_or(u32::MAX)));

        match select(exchange, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                controller.abort();
                log::warn!("{} {} aborted after {}ms", method_name(request.method), request.url, timeout_ms);
                Err(ApiError::Timeout(timeout_ms))
            }
        }
    }
}

fn method_name(method: Method) -> &'static str {
    match method {
        Method::Get => "GET",
        Method::Post => "POST",
    }
}

// ============================================================================
// Plain client
// ============================================================================

/// Transport plus timeout, without any interception. Used directly for login
/// and for the external catalog; wrapped by `ApiClient` for the backend.
#[derive(Clone)]
pub struct Http {
    transport: Arc<dyn Transport + Send + Sync>,
    timeout: Duration,
}

impl Http {
    pub fn new(transport: Arc<dyn Transport + Send + Sync>, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    /// Browser fetch transport.
    pub fn browser(timeout: Duration) -> Self {
        Self::new(Arc::new(FetchTransport), timeout)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let request = request.with_timeout(self.timeout);
        log::debug!("{} {}", method_name(request.method), request.url);
        self.transport.send(request).await
    }

    /// GET a JSON document with no credentials attached.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let request = HttpRequest::get(url).header("Accept", "application/json");
        self.send(request).await?.into_result()
    }
}

/// Join a base URL and a path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_replaces_case_insensitively() {
        let request = HttpRequest::get("http://x/")
            .header("Accept", "text/html")
            .header("accept", "application/json");
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.header_value("ACCEPT"), Some("application/json"));
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let request = HttpRequest::post("http://x/")
            .json_body(&json!({"email": "a@b.c"}))
            .unwrap();
        assert_eq!(request.body.as_deref(), Some(r#"{"email":"a@b.c"}"#));
        assert_eq!(request.header_value("content-type"), Some("application/json"));
    }

    #[test]
    fn test_into_result_maps_status() {
        let ok = HttpResponse { status: 200, body: "[1,2]".to_string() };
        assert_eq!(ok.into_result::<Vec<u8>>().unwrap(), vec![1, 2]);

        let missing = HttpResponse { status: 404, body: r#"{"message":"Not found"}"#.to_string() };
        let err = missing.into_result::<Vec<u8>>().unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.server_message(), Some("Not found"));
    }

    #[test]
    fn test_into_result_decode_error() {
        let garbled = HttpResponse { status: 200, body: "{".to_string() };
        assert!(matches!(garbled.into_result::<Vec<u8>>(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://127.0.0.1:8000/", "/api/sync"), "http://127.0.0.1:8000/api/sync");
        assert_eq!(join_url("https://swapi.dev/api", "people/1/"), "https://swapi.dev/api/people/1/");
    }
}
