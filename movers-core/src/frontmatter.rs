//! Front-matter extraction and metadata coercion.

use crate::models::Frontmatter;
use regex::Regex;
use std::sync::OnceLock;

static FRONTMATTER_REGEX: OnceLock<Regex> = OnceLock::new();

fn frontmatter_regex() -> &'static Regex {
    FRONTMATTER_REGEX
        .get_or_init(|| Regex::new(r"(?s)^---\s*\n(.*?)\n---[ \t]*(?:\n(.*))?$").unwrap())
}

/// Strip a leading byte-order mark, and leading whitespace when it precedes a
/// front-matter delimiter, so malformed leading whitespace does not break
/// detection.
pub fn sanitize(raw: &str) -> &str {
    let without_bom = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let trimmed = without_bom.trim_start();
    if trimmed.starts_with("---") {
        trimmed
    } else {
        without_bom
    }
}

/// Split a sanitized document into metadata and body.
///
/// A document without a front-matter block yields default metadata and the
/// full text as body. A block that is not valid YAML also yields default
/// metadata, but the body still has the block stripped; the failure is logged
/// and never aborts ingestion of other documents.
///
/// # Example
///
/// ```
/// use movers_core::frontmatter::parse_frontmatter;
///
/// let (meta, body) = parse_frontmatter("---\ntitle: Hello\n---\n# World\n");
/// assert_eq!(meta.title.as_deref(), Some("Hello"));
/// assert!(body.starts_with("# World"));
/// ```
pub fn parse_frontmatter(content: &str) -> (Frontmatter, String) {
    let Some(captures) = frontmatter_regex().captures(content) else {
        return (Frontmatter::default(), content.to_string());
    };

    let yaml = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
    let body = captures.get(2).map(|m| m.as_str()).unwrap_or_default();

    if yaml.trim().is_empty() {
        return (Frontmatter::default(), body.to_string());
    }

    match serde_yaml::from_str(yaml) {
        Ok(frontmatter) => (frontmatter, body.to_string()),
        Err(err) => {
            tracing::warn!("Unparsable front-matter, falling back to defaults: {}", err);
            (Frontmatter::default(), body.to_string())
        }
    }
}

/// Coerce the `tags` metadata value: a sequence is stringified element-wise,
/// a string is comma-split with empties dropped, any other shape is an empty
/// list.
pub fn coerce_tags(value: Option<&serde_yaml::Value>) -> Vec<String> {
    match value {
        Some(serde_yaml::Value::Sequence(items)) => items.iter().map(yaml_to_string).collect(),
        Some(serde_yaml::Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Coerce the `order` metadata value: numeric when it is already a number or
/// a string that parses to a finite number, otherwise unset.
pub fn coerce_order(value: Option<&serde_yaml::Value>) -> Option<f64> {
    let number = match value {
        Some(serde_yaml::Value::Number(n)) => n.as_f64(),
        Some(serde_yaml::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Coerce the `readingTimeMinutes` metadata value: a positive number (or a
/// string parsing to one) overrides the word-count estimate.
pub fn coerce_reading_time(value: Option<&serde_yaml::Value>) -> Option<u32> {
    let minutes = match value {
        Some(serde_yaml::Value::Number(n)) => n.as_f64(),
        Some(serde_yaml::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    if minutes.is_finite() && minutes > 0.0 {
        Some((minutes.round() as u32).max(1))
    } else {
        None
    }
}

fn yaml_to_string(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
