//! regionlookup - Typed client for the Region Lookup `lookupRegion` and
//! `searchRegion` endpoints

pub mod api;
pub mod config;
pub mod domain;
pub mod error;

pub use api::{
    LOOKUP_REGION_URL, RegionClient, ReqwestTransport, Request, SEARCH_REGION_URL, Transport,
    lookup_region, search_region,
};
pub use error::{Error, Result};
