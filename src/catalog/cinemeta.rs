/// Cinemeta catalog provider implementation.
use super::cinemeta_types::{CinemetaCatalog, CinemetaMeta};
use super::{CatalogError, CatalogItem, CatalogProvider, ContentKind};
use crate::config::{ProbeConfig, trim_base_url};
use log::debug;
use reqwest::redirect::Policy;
use serde_json::Value;

/// Catalog provider for the Cinemeta service.
///
/// Fetches the `top` catalog per content kind, which lists currently
/// popular titles with IMDb identifiers.
pub struct CinemetaProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl CinemetaProvider {
    /// Creates a provider using the catalog URL, timeout, redirect limit and
    /// user agent from `config`.
    pub fn new(config: &ProbeConfig) -> Result<Self, CatalogError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.catalog_timeout)
            .redirect(Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| CatalogError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: trim_base_url(&config.catalog_url).to_string(),
        })
    }

    /// URL of the top catalog for `kind`
    fn catalog_url(&self, kind: ContentKind) -> String {
        format!("{}/catalog/{}/top.json", self.base_url, kind)
    }

    /// Converts a Cinemeta entry to our internal CatalogItem.
    fn convert_meta(meta: CinemetaMeta) -> CatalogItem {
        let year = meta
            .year
            .as_ref()
            .and_then(parse_year)
            .or_else(|| meta.release_info.as_deref().and_then(leading_year));

        CatalogItem {
            id: meta.id,
            imdb_id: meta.imdb_id,
            name: meta.name.unwrap_or_else(|| "Unknown".to_string()),
            poster: meta.poster,
            year,
        }
    }

    /// Converts a full catalog response into catalog items.
    fn convert_catalog(catalog: CinemetaCatalog) -> Vec<CatalogItem> {
        catalog.metas.into_iter().map(Self::convert_meta).collect()
    }
}

impl CatalogProvider for CinemetaProvider {
    fn fetch_top(&self, kind: ContentKind) -> Result<Vec<CatalogItem>, CatalogError> {
        let url = self.catalog_url(kind);
        debug!("Fetching {} catalog from {}", kind, url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| CatalogError::RequestError(e.to_string()))?;

        // Ensure request was successful
        if !response.status().is_success() {
            return Err(CatalogError::RequestError(format!(
                "HTTP {} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let catalog: CinemetaCatalog = response
            .json()
            .map_err(|e| CatalogError::ParseError(e.to_string()))?;

        Ok(Self::convert_catalog(catalog))
    }
}

/// Reads a year given either as a number or as a string like "2011-2019".
fn parse_year(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|y| u16::try_from(y).ok()),
        Value::String(s) => leading_year(s),
        _ => None,
    }
}

/// Extracts the leading four-digit year from free-form release info.
fn leading_year(text: &str) -> Option<u16> {
    let digits: String = text.trim().chars().take(4).collect();
    if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}
