pub mod common;
pub mod lookup;
pub mod search;

pub use common::{LanguageRegion, PaginationOptions, RegionMatch, ResponseEnvelope};
pub use lookup::{
    LookupPlaceType, LookupRegionRequestData, LookupRegionResponseData, RegionIdentifier,
    RegionLocation,
};
pub use search::{
    LatLng, RegionSearchValue, SearchPlaceType, SearchRegionRequestData,
    SearchRegionResponseData,
};
