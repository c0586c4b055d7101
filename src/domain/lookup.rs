use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::common::{LanguageRegion, PaginationOptions, ResponseEnvelope};

/// Place types accepted by `lookupRegion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum LookupPlaceType {
    #[serde(rename = "administrative_area_level_1")]
    #[value(name = "administrative_area_level_1")]
    AdministrativeAreaLevel1,
    #[serde(rename = "administrative_area_level_2")]
    #[value(name = "administrative_area_level_2")]
    AdministrativeAreaLevel2,
    Country,
    Locality,
    Neighborhood,
    PostalCode,
}

/// What to match a Place ID to. Exactly one of `place` or `unit_code` must be
/// set; the service answers `INVALID_ARGUMENT` otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionLocation {
    /// Free-text region name, e.g. "Palo Alto, CA" for a locality or "94109"
    /// for a postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    /// FIPS state/county code (US only, needs `region_code`) or ISO-3166-1
    /// country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_code: Option<String>,
}

impl RegionLocation {
    pub fn place(place: impl Into<String>) -> Self {
        Self {
            place: Some(place.into()),
            unit_code: None,
        }
    }

    pub fn unit_code(code: impl Into<String>) -> Self {
        Self {
            place: None,
            unit_code: Some(code.into()),
        }
    }
}

/// A single region to look up.
///
/// Candidates are only returned when the lookup finds a region of a different
/// place type than requested; a direct match carries none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionIdentifier {
    pub location: RegionLocation,
    pub place_type: LookupPlaceType,
    /// At most three candidates are supported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_candidates: Option<u32>,
    #[serde(flatten)]
    pub hint: LanguageRegion,
}

impl RegionIdentifier {
    pub fn new(location: RegionLocation, place_type: LookupPlaceType) -> Self {
        Self {
            location,
            place_type,
            max_candidates: None,
            hint: LanguageRegion::default(),
        }
    }

    pub fn with_region_code(mut self, region_code: impl Into<String>) -> Self {
        self.hint.region_code = Some(region_code.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.hint.language = Some(language.into());
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: u32) -> Self {
        self.max_candidates = Some(max_candidates);
        self
    }
}

/// Body of a `lookupRegion` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRegionRequestData {
    pub identifiers: Vec<RegionIdentifier>,
    #[serde(flatten)]
    pub pagination: PaginationOptions,
}

impl LookupRegionRequestData {
    pub fn new(identifiers: Vec<RegionIdentifier>) -> Self {
        Self {
            identifiers,
            pagination: PaginationOptions::default(),
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.pagination.page_size = Some(page_size);
        self
    }

    /// Same request, positioned at the page `token` refers to.
    pub fn with_page_token(mut self, token: impl Into<String>) -> Self {
        self.pagination.page_token = Some(token.into());
        self
    }
}

/// Matches, one per [`RegionIdentifier`] in request order.
pub type LookupRegionResponseData = ResponseEnvelope;
