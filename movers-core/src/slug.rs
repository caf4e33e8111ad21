//! Slug derivation from source paths.

/// Derive the canonical article slug from a source path: the final path
/// segment with the markdown extension stripped. No further normalization is
/// applied; the file stem is the stable identifier.
///
/// # Examples
///
/// ```
/// use movers_core::slug_from_path;
///
/// assert_eq!(slug_from_path("./mockup/intro-to-sui.md"), "intro-to-sui");
/// assert_eq!(slug_from_path("Getting_Started.MD"), "Getting_Started");
/// ```
pub fn slug_from_path(path: &str) -> String {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    strip_markdown_extension(file_name).to_string()
}

/// Fallback title for a slug: separators become spaces and each word's first
/// letter is uppercased.
pub fn title_from_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_markdown_extension(name: &str) -> &str {
    for ext in [".md", ".markdown"] {
        if name.len() > ext.len() {
            if let Some(tail) = name.get(name.len() - ext.len()..) {
                if tail.eq_ignore_ascii_case(ext) {
                    return &name[..name.len() - ext.len()];
                }
            }
        }
    }
    name
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
