//! Shared helpers for the client integration tests

use std::sync::{Arc, Mutex};

use airvisual::{AirVisualClient, HttpResponse, HttpTransport, TransportError};

pub const API_KEY: &str = "API Key";
pub const BASE_URL: &str = "http://airvisual.test";

/// Answers every request with the same canned response and records URLs
pub struct StubTransport {
    status: u16,
    body: String,
    requests: Mutex<Vec<String>>,
}

impl StubTransport {
    pub fn new(status: u16, body: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.into(),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn ok(body: impl Into<String>) -> Arc<Self> {
        Self::new(200, body)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpTransport for StubTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        Ok(HttpResponse::new(self.status, self.body.clone()))
    }
}

/// Fails every request as if the host could not be reached
pub struct UnreachableTransport;

impl HttpTransport for UnreachableTransport {
    fn get(&self, _url: &str) -> Result<HttpResponse, TransportError> {
        Err(Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}

pub fn client_with(transport: Arc<StubTransport>) -> AirVisualClient {
    AirVisualClient::with_transport(API_KEY, transport).with_base_url(BASE_URL)
}

pub fn call_limit_body(data: &str) -> String {
    format!(r#"{{"status": "call_limit_reached", "data": {data}}}"#)
}
