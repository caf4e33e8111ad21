//! List command implementation.

use anyhow::{Context, Result};
use movers_core::{Article, ArticleCatalog};
use std::path::Path;

pub fn list_articles(content_dir: &Path, json: bool, tag: Option<&str>) -> Result<()> {
    let catalog = ArticleCatalog::load_dir(content_dir)
        .with_context(|| format!("Failed to load articles from {:?}", content_dir))?;

    let articles: Vec<&Article> = catalog
        .articles()
        .iter()
        .filter(|article| {
            tag.map_or(true, |t| {
                article.tags.iter().any(|candidate| candidate.eq_ignore_ascii_case(t))
            })
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&articles)?);
        return Ok(());
    }

    if articles.is_empty() {
        println!("No articles found.");
        return Ok(());
    }

    for article in articles {
        let tags = if article.tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", article.tags.join(", "))
        };
        println!(
            "{:<28} {} ({} min){}",
            article.slug, article.title, article.reading_time_minutes, tags
        );
    }

    Ok(())
}
