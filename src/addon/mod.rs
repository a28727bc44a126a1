//! Addon client module
//!
//! This module provides the trait through which the probe talks to the addon
//! under test, the wire types of its stream and meta resources, and the
//! default HTTP implementation.

mod addon_types;
mod http;

pub use addon_types::{MetaDetail, MetaResponse, MetaVideo, StreamCandidate, StreamResponse};
pub use http::HttpAddonClient;

use crate::catalog::ContentKind;
use thiserror::Error;

/// Errors that can occur while querying an addon
#[derive(Debug, Error)]
pub enum AddonError {
    /// The request could not be completed (connection, timeout, ...)
    #[error("Request failed: {0}")]
    RequestError(String),

    /// The addon answered with a non-success status code
    #[error("HTTP {status}")]
    HttpStatus { status: u16 },

    /// The response body could not be decoded
    #[error("Failed to parse addon response: {0}")]
    ParseError(String),

    /// The HTTP client could not be constructed
    #[error("Failed to build addon HTTP client: {0}")]
    ClientBuild(String),
}

/// Trait for clients of a single addon endpoint
///
/// Implementors resolve the addon's `stream` and `meta` resources for a
/// content kind and identifier.
pub trait AddonClient {
    /// Base URL of the addon, without trailing slash
    fn base_url(&self) -> &str;

    /// Requests the playable stream list for `id`
    fn streams(&self, kind: ContentKind, id: &str) -> Result<StreamResponse, AddonError>;

    /// Requests the descriptive metadata for `id`
    ///
    /// For series this includes the episode list (`meta.videos`).
    fn meta(&self, kind: ContentKind, id: &str) -> Result<MetaResponse, AddonError>;
}
