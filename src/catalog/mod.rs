/// Data structures and traits for top-content catalog retrieval.
///
/// This module provides the catalog item model shared by every part of the
/// probe, the content kind tag used in addon paths, and the trait through
/// which catalogs are fetched.
mod cinemeta;
mod cinemeta_types;

pub use cinemeta::CinemetaProvider;

use std::fmt;
use thiserror::Error;

/// Errors that can occur while fetching a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request to the catalog service failed
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Failed to parse the catalog's JSON response
    #[error("Failed to parse catalog response: {0}")]
    ParseError(String),

    /// The catalog returned no items
    #[error("No {0} content available in catalog")]
    EmptyCatalog(ContentKind),

    /// The HTTP client could not be constructed
    #[error("Failed to build catalog HTTP client: {0}")]
    ClientBuild(String),
}

/// The kind of content being looked up, as used in addon paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Movie,
    Series,
}

impl ContentKind {
    /// The path segment for this kind (`movie` or `series`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Movie => "movie",
            ContentKind::Series => "series",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A minimal content descriptor from a top-content catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    /// The catalog's own identifier
    pub id: String,
    /// The IMDb identifier, when the catalog provides one
    pub imdb_id: Option<String>,
    /// Display name
    pub name: String,
    /// Poster image URL
    pub poster: Option<String>,
    /// Release year
    pub year: Option<u16>,
}

impl CatalogItem {
    /// The identifier to query addons with.
    ///
    /// Addons resolve streams by IMDb id, so it is preferred over the
    /// catalog's internal id whenever it is present.
    pub fn content_id(&self) -> &str {
        match self.imdb_id.as_deref() {
            Some(imdb_id) if !imdb_id.is_empty() => imdb_id,
            _ => &self.id,
        }
    }
}

/// Trait for services that can list top content of a given kind.
///
/// The probe only needs a realistic, currently popular title per kind, so
/// implementors return the catalog's first page as-is.
pub trait CatalogProvider: Sync {
    /// Fetches the top-content list for `kind`.
    ///
    /// An empty list is a valid response here; deciding whether an empty
    /// catalog is fatal is left to the caller.
    fn fetch_top(&self, kind: ContentKind) -> Result<Vec<CatalogItem>, CatalogError>;
}
