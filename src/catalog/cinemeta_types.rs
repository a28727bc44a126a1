/// Cinemeta API response types for deserialization.
///
/// These structures mirror the JSON returned by the Cinemeta catalog
/// endpoints (`/catalog/{kind}/top.json`).
use serde::Deserialize;
use serde_json::Value;

/// The top-level catalog response.
#[derive(Debug, Deserialize)]
pub(super) struct CinemetaCatalog {
    /// Catalog entries (missing is treated as empty)
    #[serde(default)]
    pub metas: Vec<CinemetaMeta>,
}

/// A single catalog entry.
#[derive(Debug, Deserialize)]
pub(super) struct CinemetaMeta {
    /// Catalog identifier (usually an IMDb id already)
    pub id: String,
    /// Explicit IMDb identifier
    pub imdb_id: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Poster image URL
    pub poster: Option<String>,
    /// Free-form release info such as "2011-2019"
    #[serde(rename = "releaseInfo")]
    pub release_info: Option<String>,
    /// Release year; Cinemeta sends either a number or a string
    pub year: Option<Value>,
}
