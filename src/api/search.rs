use super::request::{Request, dispatch};
use super::transport::{HttpResponse, Transport};
use crate::domain::{SearchRegionRequestData, SearchRegionResponseData};
use crate::error::Result;

pub const SEARCH_REGION_URL: &str = "https://regionlookup.googleapis.com/v1alpha:searchRegion";

pub type SearchRegionRequest = Request<SearchRegionRequestData>;
pub type SearchRegionResponse = HttpResponse<SearchRegionResponseData>;

/// Search for region Place IDs by considering every region that contains the
/// given address, coordinates or Place ID.
///
/// Same contract as [`lookup_region`](super::lookup_region), against the
/// `searchRegion` endpoint.
pub async fn search_region<T>(
    request: SearchRegionRequest,
    transport: &T,
) -> Result<SearchRegionResponse>
where
    T: Transport + ?Sized,
{
    let items = request.data.search_values.len();
    dispatch(request, SEARCH_REGION_URL, items, transport).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::StubTransport;
    use crate::domain::{RegionSearchValue, SearchPlaceType};
    use crate::error::Error;
    use reqwest::header::CONTENT_TYPE;
    use reqwest::{Method, StatusCode};

    fn request(values: Vec<RegionSearchValue>) -> SearchRegionRequest {
        Request::new("test-key", SearchRegionRequestData::new(values)).unwrap()
    }

    #[tokio::test]
    async fn test_search_reads_camel_case_response() {
        let stub = StubTransport::ok(r#"{"matches":[{"matchedPlaceId":"ChIJHQ6aMnBTwokRc-T-3CrcvOE"}]}"#);
        let value = RegionSearchValue::address("newark", SearchPlaceType::Locality)
            .with_region_code("us")
            .with_language_code("en");

        let response = search_region(request(vec![value]), &stub).await.unwrap();

        assert_eq!(
            response.data.matches[0].matched_place_id.as_deref(),
            Some("ChIJHQ6aMnBTwokRc-T-3CrcvOE")
        );
    }

    #[tokio::test]
    async fn test_search_defaults_to_post_on_fixed_url() {
        let stub = StubTransport::ok(r#"{"matches":[]}"#);

        search_region(request(vec![]), &stub).await.unwrap();

        let sent = stub.last_request();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.url, SEARCH_REGION_URL);
        assert_eq!(sent.headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[tokio::test]
    async fn test_search_honors_overrides() {
        let stub = StubTransport::ok(r#"{"matches":[]}"#);
        let req = request(vec![])
            .with_url("http://127.0.0.1:9000/search")
            .with_method(Method::PATCH);

        search_region(req, &stub).await.unwrap();

        let sent = stub.last_request();
        assert_eq!(sent.url, "http://127.0.0.1:9000/search");
        assert_eq!(sent.method, Method::PATCH);
    }

    #[tokio::test]
    async fn test_search_body_shape() {
        let stub = StubTransport::ok(r#"{"matches":[{},{}]}"#);
        let values = vec![
            RegionSearchValue::latlng(37.4220656, -122.0862784, SearchPlaceType::Locality),
            RegionSearchValue::place_id("ChIJj61dQgK6j4AR4GeTYWZsKWw", SearchPlaceType::AdministrativeAreaLevel2),
        ];

        let response = search_region(request(values), &stub).await.unwrap();

        let body = stub.last_body();
        assert!(body.get("page_token").is_none());
        assert_eq!(body["search_values"].as_array().unwrap().len(), 2);
        assert_eq!(body["search_values"][0]["latlng"]["latitude"], 37.4220656);
        assert_eq!(body["search_values"][1]["place_type"], "administrative_area_level_2");
        assert_eq!(response.data.matches.len(), 2);
    }

    #[tokio::test]
    async fn test_search_propagates_transport_error() {
        let stub = StubTransport::with_status(StatusCode::FORBIDDEN, "API key not valid");

        let err = search_region(request(vec![]), &stub).await.unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    }

    #[tokio::test]
    async fn test_search_rejects_error_status_returned_as_ok() {
        let stub = StubTransport::passing_status(StatusCode::NOT_FOUND, "no such endpoint");

        let err = search_region(request(vec![]), &stub).await.unwrap_err();

        assert!(matches!(err, Error::Status { status, .. } if status == StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_search_resubmits_with_page_token() {
        let stub = StubTransport::ok(r#"{"matches":[{}]}"#);
        let value = RegionSearchValue::address("newark", SearchPlaceType::Locality)
            .with_region_code("us")
            .with_language("en");
        let data = SearchRegionRequestData::new(vec![value])
            .with_page_size(1)
            .with_page_token("next-1");

        search_region(Request::new("k", data).unwrap(), &stub)
            .await
            .unwrap();

        let body = stub.last_body();
        assert_eq!(body["page_token"], "next-1");
        assert_eq!(body["page_size"], 1);
        assert_eq!(body["search_values"][0]["language"], "en");
        assert_eq!(body["search_values"][0]["address"], "newark");
    }
}
