//! HTTP transport seam.
//!
//! Region requests never talk to the network directly: they hand a fully
//! configured [`HttpRequest`] to a [`Transport`] and get the raw response back.
//! [`ReqwestTransport`] is the production implementation; tests plug in their
//! own.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("regionlookup/", env!("CARGO_PKG_VERSION"));

/// Default client timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Per-request transport settings passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportOptions {
    /// Overrides the transport's own timeout for this request.
    pub timeout: Option<Duration>,
    /// Extra query parameters appended to the URL.
    pub query: Vec<(String, String)>,
}

/// A request as handed to the transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    pub options: TransportOptions,
}

/// A transport response. `data` starts out as the raw body and is narrowed to
/// a typed value with [`HttpResponse::json`].
#[derive(Debug, Clone)]
pub struct HttpResponse<T> {
    pub data: T,
    pub status: StatusCode,
    pub headers: HeaderMap,
}

impl HttpResponse<Vec<u8>> {
    /// Parse the body as JSON, keeping status and headers.
    pub fn json<T: DeserializeOwned>(self) -> Result<HttpResponse<T>> {
        let data = serde_json::from_slice(&self.data).map_err(Error::Decode)?;
        Ok(HttpResponse {
            data,
            status: self.status,
            headers: self.headers,
        })
    }
}

/// Executes a configured HTTP call.
///
/// Implementations must treat non-2xx responses as failures
/// ([`Error::Status`]) and must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse<Vec<u8>>>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse<Vec<u8>>> {
        (**self).execute(request).await
    }
}

/// [`Transport`] backed by an async `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse<Vec<u8>>> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
            options,
        } = request;

        let mut builder = self.client.request(method, &url).headers(headers).body(body);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            tracing::warn!(%status, %url, "Region Lookup API returned error status");
            return Err(Error::Status { status, body });
        }

        Ok(HttpResponse {
            data: body.to_vec(),
            status,
            headers,
        })
    }
}
