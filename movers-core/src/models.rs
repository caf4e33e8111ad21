//! Article record and front-matter models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Front-matter metadata from a markdown source.
///
/// Every field is optional. `tags`, `readingTimeMinutes` and `order` arrive
/// with no guaranteed shape, so they are kept as raw YAML values and coerced
/// by the explicit per-field rules in [`crate::frontmatter`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub hero_image: Option<String>,

    #[serde(default)]
    pub published_at: Option<String>,

    #[serde(default)]
    pub updated_at: Option<String>,

    #[serde(default)]
    pub tags: Option<serde_yaml::Value>,

    #[serde(default)]
    pub reading_time_minutes: Option<serde_yaml::Value>,

    #[serde(default)]
    pub order: Option<serde_yaml::Value>,
}

/// A single learning article in the catalog.
///
/// `slug`, `title` and `description` always resolve to a value; no partial
/// record is ever published.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Canonical identifier, derived from the source file name.
    pub slug: String,

    pub title: String,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,

    /// Raw metadata date string, carried verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Order-preserving; duplicates are not collapsed.
    pub tags: Vec<String>,

    /// Always at least one minute.
    pub reading_time_minutes: u32,

    /// Markdown body with the front-matter block stripped.
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,

    /// Parsed `published_at`, used only for catalog ordering.
    #[serde(skip)]
    pub published: Option<NaiveDate>,
}
