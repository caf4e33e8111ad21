//! Show command implementation.

use anyhow::{bail, Context, Result};
use movers_core::ArticleCatalog;
use std::path::Path;

pub fn show_article(content_dir: &Path, slug: &str, json: bool) -> Result<()> {
    let catalog = ArticleCatalog::load_dir(content_dir)
        .with_context(|| format!("Failed to load articles from {:?}", content_dir))?;

    let Some(article) = catalog.find_by_slug(slug) else {
        bail!("No article found for slug '{}'", slug);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(article)?);
        return Ok(());
    }

    println!("{}", article.title);
    println!("slug: {}", article.slug);
    if let Some(published) = &article.published_at {
        println!("published: {}", published);
    }
    if !article.tags.is_empty() {
        println!("tags: {}", article.tags.join(", "));
    }
    println!("reading time: {} min", article.reading_time_minutes);
    println!();
    println!("{}", article.description);

    Ok(())
}
