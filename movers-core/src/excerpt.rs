//! Excerpt synthesis and reading-time estimation for article bodies.

use regex::Regex;
use std::sync::OnceLock;

/// Description used when a document carries no metadata description and its
/// cleaned body is empty.
pub const FALLBACK_DESCRIPTION: &str = "Educational resources aggregated by the First Movers Community. Discover to expand your knowledge about blockchain and Sui.";

const WORDS_PER_MINUTE: usize = 200;
const EXCERPT_LIMIT: usize = 200;
const EXCERPT_TRUNCATED_LEN: usize = 197;

static CODE_SPANS: OnceLock<Regex> = OnceLock::new();
static IMAGES: OnceLock<Regex> = OnceLock::new();
static LINKS: OnceLock<Regex> = OnceLock::new();
static MARKUP: OnceLock<Regex> = OnceLock::new();
static WHITESPACE: OnceLock<Regex> = OnceLock::new();

/// Synthesize a plain-text excerpt from a markdown body.
///
/// Code spans, images and links are removed outright (no link text survives),
/// markdown punctuation is stripped, whitespace is collapsed. Cleaned text
/// over 200 characters is cut to 197 plus an ellipsis; an empty result falls
/// back to [`FALLBACK_DESCRIPTION`].
pub fn create_excerpt(content: &str) -> String {
    let cleaned = clean_markdown(content);
    if cleaned.is_empty() {
        return FALLBACK_DESCRIPTION.to_string();
    }

    if cleaned.chars().count() > EXCERPT_LIMIT {
        let cut: String = cleaned.chars().take(EXCERPT_TRUNCATED_LEN).collect();
        format!("{}...", cut.trim_end())
    } else {
        cleaned
    }
}

/// Estimate reading time at 200 words per minute, rounded to the nearest
/// minute and never below one.
pub fn reading_time_minutes(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    let minutes = (words as f64 / WORDS_PER_MINUTE as f64).round() as u32;
    minutes.max(1)
}

fn clean_markdown(content: &str) -> String {
    let code = CODE_SPANS.get_or_init(|| Regex::new(r"(?s)`{1,3}.*?`{1,3}").unwrap());
    let images = IMAGES.get_or_init(|| Regex::new(r"!\[[^\]]*\]\([^)]+\)").unwrap());
    let links = LINKS.get_or_init(|| Regex::new(r"\[[^\]]*\]\([^)]+\)").unwrap());
    let markup = MARKUP.get_or_init(|| Regex::new(r"[#>*_`-]").unwrap());
    let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").unwrap());

    let cleaned = code.replace_all(content, "");
    let cleaned = images.replace_all(&cleaned, "");
    let cleaned = links.replace_all(&cleaned, "");
    let cleaned = markup.replace_all(&cleaned, "");
    let cleaned = whitespace.replace_all(&cleaned, " ");
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_code_images_and_links() {
        let body = "# Intro\n\nUse `cargo build` first.\n\n![diagram](img.png)\n\nSee [the docs](https://example.com) for more.";
        let excerpt = create_excerpt(body);
        assert_eq!(excerpt, "Intro Use first. See for more.");
    }

    #[test]
    fn fenced_blocks_are_removed() {
        let body = "Before\n\n```rust\nfn main() {}\n```\n\nAfter";
        assert_eq!(create_excerpt(body), "Before After");
    }

    #[test]
    fn long_text_truncates_to_197_plus_ellipsis() {
        let body = "word ".repeat(100);
        let excerpt = create_excerpt(&body);
        assert!(excerpt.ends_with("..."));
        // 197 chars of content with trailing whitespace trimmed, then "...".
        assert!(excerpt.chars().count() <= EXCERPT_TRUNCATED_LEN + 3);
        assert!(excerpt.chars().count() > EXCERPT_LIMIT - 10);
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(create_excerpt("Just a sentence."), "Just a sentence.");
    }

    #[test]
    fn empty_body_uses_fallback() {
        assert_eq!(create_excerpt(""), FALLBACK_DESCRIPTION);
        // Markup-only bodies clean down to nothing.
        assert_eq!(create_excerpt("### --- > *"), FALLBACK_DESCRIPTION);
    }

    #[test]
    fn reading_time_rounds_at_200_wpm() {
        let body = "word ".repeat(400);
        assert_eq!(reading_time_minutes(&body), 2);
    }

    #[test]
    fn reading_time_floors_at_one_minute() {
        assert_eq!(reading_time_minutes(""), 1);
        assert_eq!(reading_time_minutes("tiny body"), 1);
    }
}
