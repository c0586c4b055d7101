use super::request::{Request, dispatch};
use super::transport::{HttpResponse, Transport};
use crate::domain::{LookupRegionRequestData, LookupRegionResponseData};
use crate::error::Result;

pub const LOOKUP_REGION_URL: &str = "https://regionlookup.googleapis.com/v1alpha:lookupRegion";

pub type LookupRegionRequest = Request<LookupRegionRequestData>;
pub type LookupRegionResponse = HttpResponse<LookupRegionResponseData>;

/// Look up region Place IDs for a set of region identifiers.
///
/// Supported place types are `postal_code`, `administrative_area_level_1`,
/// `administrative_area_level_2`, `locality`, `neighborhood` and `country`.
///
/// # Arguments
/// * `request` - Identifiers plus transport settings; see [`Request`]
/// * `transport` - Executes the HTTP call
///
/// # Returns
/// * `Ok(response)` - One match per identifier, in order
/// * `Err` - Whatever the transport reported, unchanged
pub async fn lookup_region<T>(
    request: LookupRegionRequest,
    transport: &T,
) -> Result<LookupRegionResponse>
where
    T: Transport + ?Sized,
{
    let items = request.data.identifiers.len();
    dispatch(request, LOOKUP_REGION_URL, items, transport).await
}
