use std::time::Duration;

use super::lookup::{LookupRegionResponse, lookup_region};
use super::request::Request;
use super::search::{SearchRegionResponse, search_region};
use super::transport::{ReqwestTransport, Transport};
use crate::domain::{LookupRegionRequestData, SearchRegionRequestData};
use crate::error::Result;

/// Convenience wrapper holding an API key, a transport and optional endpoint
/// overrides. Every call still builds a fresh [`Request`].
#[derive(Debug, Clone)]
pub struct RegionClient<T = ReqwestTransport> {
    transport: T,
    api_key: String,
    lookup_url: Option<String>,
    search_url: Option<String>,
    timeout: Option<Duration>,
}

impl RegionClient<ReqwestTransport> {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::with_transport(api_key, ReqwestTransport::new()?))
    }
}

impl<T: Transport> RegionClient<T> {
    pub fn with_transport(api_key: impl Into<String>, transport: T) -> Self {
        Self {
            transport,
            api_key: api_key.into(),
            lookup_url: None,
            search_url: None,
            timeout: None,
        }
    }

    pub fn with_lookup_url(mut self, url: impl Into<String>) -> Self {
        self.lookup_url = Some(url.into());
        self
    }

    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = Some(url.into());
        self
    }

    /// Per-request timeout applied on top of the transport's own.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn lookup(&self, data: LookupRegionRequestData) -> Result<LookupRegionResponse> {
        let request = self.request(data, self.lookup_url.as_deref())?;
        lookup_region(request, &self.transport).await
    }

    pub async fn search(&self, data: SearchRegionRequestData) -> Result<SearchRegionResponse> {
        let request = self.request(data, self.search_url.as_deref())?;
        search_region(request, &self.transport).await
    }

    fn request<B>(&self, data: B, url: Option<&str>) -> Result<Request<B>> {
        let mut request = Request::new(&self.api_key, data)?;
        if let Some(url) = url {
            request = request.with_url(url);
        }
        if let Some(timeout) = self.timeout {
            request = request.with_timeout(timeout);
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::StubTransport;
    use crate::api::{LOOKUP_REGION_URL, SEARCH_REGION_URL};
    use crate::domain::{
        LookupPlaceType, RegionIdentifier, RegionLocation, RegionSearchValue, SearchPlaceType,
    };

    #[tokio::test]
    async fn test_client_uses_default_endpoints() {
        let client = RegionClient::with_transport("k", StubTransport::ok(r#"{"matches":[]}"#));

        client.lookup(LookupRegionRequestData::default()).await.unwrap();
        assert_eq!(client.transport().last_request().url, LOOKUP_REGION_URL);

        client.search(SearchRegionRequestData::default()).await.unwrap();
        assert_eq!(client.transport().last_request().url, SEARCH_REGION_URL);
    }

    #[tokio::test]
    async fn test_client_applies_overrides_per_endpoint() {
        let client = RegionClient::with_transport("k", StubTransport::ok(r#"{"matches":[{}]}"#))
            .with_lookup_url("http://localhost/lookup")
            .with_search_url("http://localhost/search")
            .with_timeout(Duration::from_secs(2));

        let identifier = RegionIdentifier::new(RegionLocation::place("94109"), LookupPlaceType::PostalCode)
            .with_region_code("us");
        client
            .lookup(LookupRegionRequestData::new(vec![identifier]))
            .await
            .unwrap();
        let sent = client.transport().last_request();
        assert_eq!(sent.url, "http://localhost/lookup");
        assert_eq!(sent.options.timeout, Some(Duration::from_secs(2)));
        assert_eq!(sent.headers.get("x-goog-api-key").unwrap(), "k");

        let value = RegionSearchValue::address("1600 Amphitheatre Pkwy", SearchPlaceType::PostalCode)
            .with_region_code("us");
        client
            .search(SearchRegionRequestData::new(vec![value]))
            .await
            .unwrap();
        assert_eq!(client.transport().last_request().url, "http://localhost/search");
    }
}
