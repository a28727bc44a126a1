//! HTTP addon client
//!
//! Implements [`AddonClient`] over `reqwest`'s blocking client, following
//! the addon URL convention `{base}/{resource}/{kind}/{id}.json`.

use super::{AddonClient, AddonError, MetaResponse, StreamResponse};
use crate::catalog::ContentKind;
use crate::config::{ProbeConfig, trim_base_url};
use log::debug;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

/// Addon client speaking HTTP to a single addon base URL
pub struct HttpAddonClient {
    client: reqwest::blocking::Client,
    base_url: String,
    stream_timeout: Duration,
    meta_timeout: Duration,
}

impl HttpAddonClient {
    /// Creates a client for `addon_url` using timeouts and user agent from `config`
    pub fn new(addon_url: &str, config: &ProbeConfig) -> Result<Self, AddonError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AddonError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: trim_base_url(addon_url).to_string(),
            stream_timeout: config.stream_timeout,
            meta_timeout: config.meta_timeout,
        })
    }

    /// Builds the URL of `resource` for the given kind and identifier
    fn resource_url(&self, resource: &str, kind: ContentKind, id: &str) -> String {
        format!("{}/{}/{}/{}.json", self.base_url, resource, kind, id)
    }

    /// Performs a GET and decodes the JSON body
    fn get_json<T: DeserializeOwned>(&self, url: &str, timeout: Duration) -> Result<T, AddonError> {
        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .map_err(|e| AddonError::RequestError(e.to_string()))?;

        debug!(
            "GET {} -> {} in {}ms",
            url,
            response.status(),
            start.elapsed().as_millis()
        );

        if !response.status().is_success() {
            return Err(AddonError::HttpStatus {
                status: response.status().as_u16(),
            });
        }

        response
            .json()
            .map_err(|e| AddonError::ParseError(e.to_string()))
    }
}

impl AddonClient for HttpAddonClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn streams(&self, kind: ContentKind, id: &str) -> Result<StreamResponse, AddonError> {
        let url = self.resource_url("stream", kind, id);
        self.get_json(&url, self.stream_timeout)
    }

    fn meta(&self, kind: ContentKind, id: &str) -> Result<MetaResponse, AddonError> {
        let url = self.resource_url("meta", kind, id);
        self.get_json(&url, self.meta_timeout)
    }
}
