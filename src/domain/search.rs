use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::common::{LanguageRegion, PaginationOptions, ResponseEnvelope};

/// Place types accepted by `searchRegion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum SearchPlaceType {
    #[serde(rename = "administrative_area_level_1")]
    #[value(name = "administrative_area_level_1")]
    AdministrativeAreaLevel1,
    #[serde(rename = "administrative_area_level_2")]
    #[value(name = "administrative_area_level_2")]
    AdministrativeAreaLevel2,
    #[serde(rename = "administrative_area_level_3")]
    #[value(name = "administrative_area_level_3")]
    AdministrativeAreaLevel3,
    #[serde(rename = "administrative_area_level_4")]
    #[value(name = "administrative_area_level_4")]
    AdministrativeAreaLevel4,
    Country,
    Locality,
    #[serde(rename = "sublocality_level_1")]
    #[value(name = "sublocality_level_1")]
    SublocalityLevel1,
    Neighborhood,
    PostalCode,
}

/// Latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// A location contained inside the region to match.
///
/// Exactly one of `address`, `latlng` or `place_id` must be set; the service
/// answers `INVALID_ARGUMENT` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSearchValue {
    /// Unstructured street address. Needs `region_code`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latlng: Option<LatLng>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    pub place_type: SearchPlaceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(flatten)]
    pub hint: LanguageRegion,
}

impl RegionSearchValue {
    fn empty(place_type: SearchPlaceType) -> Self {
        Self {
            address: None,
            latlng: None,
            place_id: None,
            place_type,
            language_code: None,
            hint: LanguageRegion::default(),
        }
    }

    pub fn address(address: impl Into<String>, place_type: SearchPlaceType) -> Self {
        Self {
            address: Some(address.into()),
            ..Self::empty(place_type)
        }
    }

    pub fn latlng(latitude: f64, longitude: f64, place_type: SearchPlaceType) -> Self {
        Self {
            latlng: Some(LatLng {
                latitude,
                longitude,
            }),
            ..Self::empty(place_type)
        }
    }

    pub fn place_id(place_id: impl Into<String>, place_type: SearchPlaceType) -> Self {
        Self {
            place_id: Some(place_id.into()),
            ..Self::empty(place_type)
        }
    }

    pub fn with_region_code(mut self, region_code: impl Into<String>) -> Self {
        self.hint.region_code = Some(region_code.into());
        self
    }

    pub fn with_language_code(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = Some(language_code.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.hint.language = Some(language.into());
        self
    }
}

/// Body of a `searchRegion` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRegionRequestData {
    pub search_values: Vec<RegionSearchValue>,
    #[serde(flatten)]
    pub pagination: PaginationOptions,
}

impl SearchRegionRequestData {
    pub fn new(search_values: Vec<RegionSearchValue>) -> Self {
        Self {
            search_values,
            pagination: PaginationOptions::default(),
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.pagination.page_size = Some(page_size);
        self
    }

    pub fn with_page_token(mut self, token: impl Into<String>) -> Self {
        self.pagination.page_token = Some(token.into());
        self
    }
}

/// Matches, one per [`RegionSearchValue`] in request order.
pub type SearchRegionResponseData = ResponseEnvelope;
