pub mod client;
pub mod lookup;
pub mod request;
pub mod search;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::RegionClient;
pub use lookup::{LOOKUP_REGION_URL, LookupRegionRequest, LookupRegionResponse, lookup_region};
pub use request::{API_KEY_HEADER, Request};
pub use search::{SEARCH_REGION_URL, SearchRegionRequest, SearchRegionResponse, search_region};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportOptions};
