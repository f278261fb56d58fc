//! AirVisual API client
//!
//! Every accessor follows the same round trip: build the query (the API key
//! is always added as `key`), GET it through the transport, check the HTTP
//! status, decode the `{status, data}` envelope and hand back `data` when
//! `status` is `success`.

mod places;
mod stations;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::config::ClientConfig;
use crate::transport::HttpTransport;
use crate::{AirVisualError, Result};

/// Envelope status of an accepted request
pub const STATUS_SUCCESS: &str = "success";

/// Responses slower than this are logged as warnings
const SLOW_RESPONSE: Duration = Duration::from_secs(5);

/// Query parameters, serialized sorted by key
pub type QueryParams = BTreeMap<String, String>;

/// Resource paths, relative to the base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub countries: String,
    pub states: String,
    pub cities: String,
    pub city: String,
    pub nearest_city: String,
    pub city_ranking: String,
    pub stations: String,
    pub station: String,
    pub nearest_station: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            countries: "/v2/countries".to_string(),
            states: "/v2/states".to_string(),
            cities: "/v2/cities".to_string(),
            city: "/v2/city".to_string(),
            nearest_city: "/v2/nearest_city".to_string(),
            city_ranking: "/v2/city_ranking".to_string(),
            stations: "/v2/stations".to_string(),
            station: "/v2/station".to_string(),
            nearest_station: "/v2/nearest_station".to_string(),
        }
    }
}

/// `{status, data}` wrapper shared by every endpoint
#[derive(Debug, Deserialize)]
struct Envelope {
    status: String,
    #[serde(default)]
    data: Value,
}

/// Blocking client for the AirVisual v2 API
///
/// Cheap to clone; clones share the underlying transport.
#[derive(Clone)]
pub struct AirVisualClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    api_key: String,
    endpoints: Endpoints,
}

impl fmt::Debug for AirVisualClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirVisualClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

impl AirVisualClient {
    /// Create a client backed by reqwest with default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(&ClientConfig::with_api_key(api_key))
    }

    /// Create a reqwest-backed client from validated configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let timeout = Duration::from_secs(config.timeout_seconds.into());
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AirVisualError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self::with_transport(config.api_key.clone(), http).with_base_url(&config.base_url))
    }

    /// Create a client that sends requests through the given transport
    pub fn with_transport<T>(api_key: impl Into<String>, transport: T) -> Self
    where
        T: HttpTransport + 'static,
    {
        Self {
            transport: Arc::new(transport),
            base_url: ClientConfig::default().base_url,
            api_key: api_key.into(),
            endpoints: Endpoints::default(),
        }
    }

    /// Point the client at a different host
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the resource paths
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Build `base + path + "?" + encoded query`
    #[must_use]
    pub fn endpoint(&self, path: &str, params: &QueryParams) -> String {
        format!("{}{}?{}", self.base_url, path, encode_query(params))
    }

    /// GET `path` and decode the whole body as `T`
    ///
    /// Sends `params` as given; the API key is added by `fetch_data`.
    /// Fails on transport errors, non-2xx statuses and undecodable bodies.
    pub(crate) fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> Result<T> {
        let url = self.endpoint(path, params);
        debug!("AirVisual API request: {} ({} params)", path, params.len());
        let start_time = Instant::now();

        let response = self.transport.get(&url).map_err(|source| {
            error!("Request to {} failed: {}", path, source);
            AirVisualError::Transport {
                endpoint: path.to_string(),
                source,
            }
        })?;

        let total_duration = start_time.elapsed();
        if total_duration > SLOW_RESPONSE {
            warn!(
                "Slow AirVisual API response from {}: {:.3}s",
                path,
                total_duration.as_secs_f64()
            );
        }

        if !response.is_success() {
            warn!("Unexpected HTTP status {} from {}", response.status, path);
            return Err(AirVisualError::HttpStatus {
                endpoint: path.to_string(),
                status: response.status,
            });
        }

        let decoded = serde_json::from_str(&response.body).map_err(|source| {
            error!("Failed to parse response from {}: {}", path, source);
            AirVisualError::Decode {
                endpoint: path.to_string(),
                source,
            }
        })?;

        info!(
            "Received {} bytes from {} in {:.3}s",
            response.body.len(),
            path,
            total_duration.as_secs_f64()
        );

        Ok(decoded)
    }

    /// Add the API key, request `path` and unwrap the envelope's `data`
    fn fetch_data<T: DeserializeOwned>(&self, path: &str, mut params: QueryParams) -> Result<T> {
        params.insert("key".to_string(), self.api_key.clone());

        let envelope: Envelope = self.request(path, &params)?;

        if envelope.status != STATUS_SUCCESS {
            let message = envelope
                .data
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string);
            warn!(
                "AirVisual API rejected request to {}: {}",
                path, envelope.status
            );
            return Err(AirVisualError::ApiStatus {
                endpoint: path.to_string(),
                status: envelope.status,
                message,
            });
        }

        serde_json::from_value(envelope.data).map_err(|source| {
            error!("Unexpected data shape from {}: {}", path, source);
            AirVisualError::Decode {
                endpoint: path.to_string(),
                source,
            }
        })
    }
}

/// Percent-encode parameters as `k1=v1&k2=v2`, sorted by key
#[must_use]
pub fn encode_query(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Build a parameter set from borrowed pairs
fn params<const N: usize>(pairs: [(&str, &str); N]) -> QueryParams {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Shortest decimal form without exponent, e.g. `34.0669` or `-118`
fn format_coordinate(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Country;
    use crate::transport::{HttpResponse, TransportError};
    use std::sync::Mutex;

    struct StubTransport {
        status: u16,
        body: String,
        urls: Mutex<Vec<String>>,
    }

    impl StubTransport {
        fn new(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                status,
                body: body.to_string(),
                urls: Mutex::new(Vec::new()),
            })
        }
    }

    impl HttpTransport for StubTransport {
        fn get(&self, url: &str) -> std::result::Result<HttpResponse, TransportError> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(HttpResponse::new(self.status, self.body.clone()))
        }
    }

    struct FailingTransport;

    impl HttpTransport for FailingTransport {
        fn get(&self, _url: &str) -> std::result::Result<HttpResponse, TransportError> {
            Err("dns error: no such host".into())
        }
    }

    fn client(transport: Arc<StubTransport>) -> AirVisualClient {
        AirVisualClient::with_transport("API Key", transport).with_base_url("http://stub")
    }

    #[test]
    fn test_endpoint_without_params() {
        let client = client(StubTransport::new(200, ""));
        assert_eq!(client.endpoint("empty", &QueryParams::new()), "http://stubempty?");
    }

    #[test]
    fn test_endpoint_with_one_param() {
        let client = client(StubTransport::new(200, ""));
        assert_eq!(
            client.endpoint("single", &params([("a", "1")])),
            "http://stubsingle?a=1"
        );
    }

    #[test]
    fn test_endpoint_with_many_params_is_sorted() {
        let client = client(StubTransport::new(200, ""));
        assert_eq!(
            client.endpoint("multi", &params([("c", "3"), ("a", "1"), ("b", "2")])),
            "http://stubmulti?a=1&b=2&c=3"
        );
    }

    #[test]
    fn test_encode_query_escapes_values() {
        let query = encode_query(&params([("city", "New York"), ("state", "A&B=C")]));
        assert_eq!(query, "city=New%20York&state=A%26B%3DC");
    }

    #[test]
    fn test_format_coordinate() {
        assert_eq!(format_coordinate(34.0669), "34.0669");
        assert_eq!(format_coordinate(-118.0), "-118");
        assert_eq!(format_coordinate(0.000_001), "0.000001");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = AirVisualClient::with_transport("k", StubTransport::new(200, ""))
            .with_base_url("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = client(StubTransport::new(200, ""));
        let debug = format!("{client:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("API Key"));
    }

    #[test]
    fn test_fetch_data_adds_key() {
        let transport = StubTransport::new(200, r#"{"status":"success","data":[]}"#);
        let client = client(transport.clone());
        let countries: Vec<Country> = client
            .fetch_data("/v2/countries", QueryParams::new())
            .unwrap();
        assert!(countries.is_empty());
        assert_eq!(
            transport.urls.lock().unwrap().as_slice(),
            ["http://stub/v2/countries?key=API%20Key"]
        );
    }

    #[test]
    fn test_with_endpoints_overrides_paths() {
        let transport = StubTransport::new(200, r#"{"status":"success","data":[]}"#);
        let client = client(transport.clone()).with_endpoints(Endpoints {
            countries: "/v3/countries".to_string(),
            ..Endpoints::default()
        });
        assert_eq!(client.endpoints().states, "/v2/states");

        let countries = client.countries().unwrap();
        assert!(countries.is_empty());
        assert_eq!(
            transport.urls.lock().unwrap().as_slice(),
            ["http://stub/v3/countries?key=API%20Key"]
        );
    }

    #[test]
    fn test_fetch_data_api_status_with_message() {
        let client = client(StubTransport::new(
            200,
            r#"{"status":"fail","data":{"message":"city_not_found"}}"#,
        ));
        let err = client
            .fetch_data::<Vec<Country>>("/v2/city", QueryParams::new())
            .unwrap_err();
        match err {
            AirVisualError::ApiStatus {
                endpoint,
                status,
                message,
            } => {
                assert_eq!(endpoint, "/v2/city");
                assert_eq!(status, "fail");
                assert_eq!(message.as_deref(), Some("city_not_found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_fetch_data_missing_data_on_failure() {
        let client = client(StubTransport::new(200, r#"{"status":"call_limit_reached"}"#));
        let err = client
            .fetch_data::<Vec<Country>>("/v2/countries", QueryParams::new())
            .unwrap_err();
        assert!(err.is_call_limit_reached());
    }

    #[test]
    fn test_fetch_data_wrong_shape_is_decode_error() {
        let client = client(StubTransport::new(
            200,
            r#"{"status":"success","data":{"country":"USA"}}"#,
        ));
        let err = client
            .fetch_data::<Vec<Country>>("/v2/countries", QueryParams::new())
            .unwrap_err();
        assert!(matches!(err, AirVisualError::Decode { .. }));
    }

    #[test]
    fn test_request_http_status_error() {
        let client = client(StubTransport::new(503, "Service Unavailable"));
        let err = client
            .request::<Value>("/v2/countries", &QueryParams::new())
            .unwrap_err();
        assert!(matches!(
            err,
            AirVisualError::HttpStatus { status: 503, .. }
        ));
    }

    #[test]
    fn test_request_malformed_json() {
        let client = client(StubTransport::new(200, r#"{"status": "success", "data": ["#));
        let err = client
            .request::<Value>("/v2/countries", &QueryParams::new())
            .unwrap_err();
        assert!(matches!(err, AirVisualError::Decode { .. }));
    }

    #[test]
    fn test_request_transport_error_hides_key() {
        let client = AirVisualClient::with_transport("secret-key", FailingTransport);
        let err = client
            .fetch_data::<Vec<Country>>("/v2/countries", QueryParams::new())
            .unwrap_err();
        assert!(matches!(err, AirVisualError::Transport { .. }));
        let message = err.to_string();
        assert!(message.contains("/v2/countries"));
        assert!(message.contains("no such host"));
        assert!(!message.contains("secret-key"));
    }
}
