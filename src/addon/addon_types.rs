/// Addon response types for deserialization.
///
/// These structures mirror the JSON served by an addon's `stream` and
/// `meta` resources. Stream entries keep every provider-specific field.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Response of `/stream/{kind}/{id}.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamResponse {
    /// Playable stream candidates (missing or null is treated as empty)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub streams: Vec<StreamCandidate>,
}

/// One playable-link entry returned by an addon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamCandidate {
    /// Free-text description, usually carrying resolution and source tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Provider or quality label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Any other provider-supplied fields, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StreamCandidate {
    /// Creates a candidate with only a title and name
    pub fn new(title: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            name: Some(name.into()),
            extra: Map::new(),
        }
    }

    /// Title and name joined by a space, lower-cased
    pub fn label_text(&self) -> String {
        format!(
            "{} {}",
            self.title.as_deref().unwrap_or_default(),
            self.name.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }
}

/// Response of `/meta/{kind}/{id}.json`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MetaResponse {
    pub meta: Option<MetaDetail>,
}

impl MetaResponse {
    /// The episode list, empty when the addon sent none
    pub fn videos(&self) -> &[MetaVideo] {
        self.meta
            .as_ref()
            .map(|m| m.videos.as_slice())
            .unwrap_or_default()
    }
}

/// The `meta` object of a meta response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MetaDetail {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub videos: Vec<MetaVideo>,
}

/// A single episode entry from `meta.videos`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetaVideo {
    /// Episode identifier, e.g. `tt0944947:1:1`
    pub id: String,
    pub title: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub season: Option<u32>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub episode: Option<u32>,
}

impl MetaVideo {
    /// Episode title, falling back to `name`, then "Unknown"
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Unknown")
    }
}

/// Reads a list that addons may send as `null`
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads a number sent either as a JSON number or as a numeric string.
///
/// Anything else becomes `None` rather than failing the whole response.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
