//! Pluggable HTTP transport
//!
//! The client only ever issues plain GET requests, so the transport surface
//! is a single method. [`reqwest::blocking::Client`] is the default
//! implementation; tests and callers with special needs can supply their own.

use std::sync::Arc;

/// Error produced by a transport implementation
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Raw HTTP response as seen by the request executor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking HTTP GET transport
///
/// Implementations must be safe to share between threads; the client hands
/// the same transport to every call.
pub trait HttpTransport: Send + Sync {
    /// Perform a GET request against a fully built URL
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// reqwest errors embed the request URL, which carries the API key; it is
/// stripped before the error leaves the transport.
impl HttpTransport for reqwest::blocking::Client {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = reqwest::blocking::Client::get(self, url)
            .send()
            .map_err(reqwest::Error::without_url)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(reqwest::Error::without_url)?;
        Ok(HttpResponse { status, body })
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
        assert!(!HttpResponse::new(429, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }

    #[test]
    fn test_reqwest_error_omits_url() {
        let client = reqwest::blocking::Client::new();
        let err = HttpTransport::get(&client, "http://127.0.0.1:1/v2/countries?key=SUPERSECRET")
            .unwrap_err();

        let mut source: Option<&(dyn std::error::Error + 'static)> = Some(&*err);
        while let Some(current) = source {
            assert!(!current.to_string().contains("SUPERSECRET"), "leaked: {current}");
            assert!(!format!("{current:?}").contains("SUPERSECRET"), "leaked: {current:?}");
            source = current.source();
        }
    }
}
