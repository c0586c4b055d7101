use std::time::Duration;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{HttpRequest, HttpResponse, Transport, TransportOptions};
use crate::error::{Error, Result};

/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "X-Goog-Api-Key";

/// A region request: the JSON body plus the transport settings used to send it.
///
/// `method` defaults to POST and `url` to the endpoint's fixed address. The
/// `Content-Type: application/json` header is always applied on dispatch and
/// replaces any Content-Type set here.
#[derive(Debug, Clone)]
pub struct Request<T> {
    pub method: Method,
    pub url: Option<String>,
    pub headers: HeaderMap,
    pub data: T,
    pub options: TransportOptions,
}

impl<T> Request<T> {
    /// Build a request authenticated with `api_key`.
    pub fn new(api_key: &str, data: T) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut value = HeaderValue::from_str(api_key)
            .map_err(|_| Error::InvalidHeader(format!("{API_KEY_HEADER} value is not valid")))?;
        value.set_sensitive(true);
        headers.insert(HeaderName::from_static("x-goog-api-key"), value);

        Ok(Self {
            method: Method::POST,
            url: None,
            headers,
            data,
            options: TransportOptions::default(),
        })
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::try_from(name)
            .map_err(|e| Error::InvalidHeader(format!("invalid header name {name:?}: {e}")))?;
        let value = HeaderValue::try_from(value)
            .map_err(|e| Error::InvalidHeader(format!("invalid value for {name}: {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.query.push((key.into(), value.into()));
        self
    }
}

/// Caller headers plus the JSON content type, which always wins.
fn merge_headers(mut headers: HeaderMap) -> HeaderMap {
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Serialize the body, issue exactly one transport call and narrow the
/// response body to `R`. A non-2xx status is an error even when the transport
/// returned it as `Ok`.
pub(crate) async fn dispatch<B, R, X>(
    request: Request<B>,
    default_url: &str,
    items: usize,
    transport: &X,
) -> Result<HttpResponse<R>>
where
    B: Serialize,
    R: DeserializeOwned,
    X: Transport + ?Sized,
{
    let Request {
        method,
        url,
        headers,
        data,
        options,
    } = request;

    let url = url.unwrap_or_else(|| default_url.to_string());
    let body = serde_json::to_vec(&data).map_err(Error::Encode)?;

    tracing::debug!(%method, %url, items, "Sending region request");

    let response = transport
        .execute(HttpRequest {
            method,
            url,
            headers: merge_headers(headers),
            body,
            options,
        })
        .await?;

    if !response.status.is_success() {
        return Err(Error::Status {
            status: response.status,
            body: String::from_utf8_lossy(&response.data).into_owned(),
        });
    }

    response.json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_defaults() {
        let request = Request::new("key-123", ()).unwrap();

        assert_eq!(request.method, Method::POST);
        assert!(request.url.is_none());
        assert_eq!(request.headers.get(API_KEY_HEADER).unwrap(), "key-123");
        assert!(request.headers.get(API_KEY_HEADER).unwrap().is_sensitive());
        assert_eq!(request.options, TransportOptions::default());
    }

    #[test]
    fn test_invalid_api_key_is_rejected() {
        let result = Request::new("bad\nkey", ());
        assert!(matches!(result, Err(Error::InvalidHeader(_))));
    }

    #[test]
    fn test_builder_overrides() {
        let request = Request::new("k", ())
            .unwrap()
            .with_method(Method::PUT)
            .with_url("http://localhost/lookup")
            .with_timeout(Duration::from_secs(3))
            .with_query("alt", "json")
            .with_header("X-Request-Id", "abc")
            .unwrap();

        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.url.as_deref(), Some("http://localhost/lookup"));
        assert_eq!(request.options.timeout, Some(Duration::from_secs(3)));
        assert_eq!(request.options.query, vec![("alt".to_string(), "json".to_string())]);
        assert_eq!(request.headers.get("x-request-id").unwrap(), "abc");
    }

    #[test]
    fn test_fixed_content_type_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        headers.insert("x-goog-api-key", HeaderValue::from_static("k"));

        let merged = merge_headers(headers);

        assert_eq!(merged.get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(merged.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(merged.get("x-goog-api-key").unwrap(), "k");
    }
}
