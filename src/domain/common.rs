use serde::{Deserialize, Serialize};

/// Paging controls shared by both endpoints.
///
/// When unset the service returns at most 50 matches per page; `page_size`
/// values above 1000 are coerced to 1000 by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Token from a previous response's `next_page_token`. Every other
    /// parameter must match the call that produced it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// Language and region hints attached to each identifier or search value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRegion {
    /// BCP-47 language code such as "en-US" or "sr-Latn". English if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Two-letter ISO-3166 country/region code. Required by the service
    /// unless the place type is `country`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
}

/// Result for a single identifier or search value.
///
/// The service answers in proto-JSON camelCase; the aliases accept that as
/// well as the snake_case field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionMatch {
    /// Place ID of the matched boundary. Not set when nothing matched.
    #[serde(
        default,
        alias = "matchedPlaceId",
        skip_serializing_if = "Option::is_none"
    )]
    pub matched_place_id: Option<String>,
    /// Up to `max_candidates` Place IDs of a different place type than the one
    /// requested. Empty on a direct match.
    #[serde(default, alias = "candidatePlaceIds")]
    pub candidate_place_ids: Vec<String>,
    /// Matching diagnostics, only populated when no match was found.
    #[serde(default, alias = "debugInfo", skip_serializing_if = "Option::is_none")]
    pub debug_info: Option<String>,
}

impl RegionMatch {
    pub fn is_match(&self) -> bool {
        self.matched_place_id.is_some()
    }
}

/// Body returned by both endpoints.
///
/// `matches` has one entry per input item, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub matches: Vec<RegionMatch>,
    /// Absent on the last page.
    #[serde(
        default,
        alias = "nextPageToken",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_page_token: Option<String>,
}

impl ResponseEnvelope {
    pub fn has_next_page(&self) -> bool {
        self.next_page_token.is_some()
    }
}
