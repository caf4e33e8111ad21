//! Eager, immutable article catalog built from markdown sources.

use crate::excerpt::{create_excerpt, reading_time_minutes};
use crate::frontmatter::{
    coerce_order, coerce_reading_time, coerce_tags, parse_frontmatter, sanitize,
};
use crate::models::Article;
use crate::slug::{slug_from_path, title_from_slug};
use chrono::NaiveDate;
use regex::Regex;
use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();

fn heading_regex() -> &'static Regex {
    HEADING_REGEX.get_or_init(|| Regex::new(r"(?m)^#\s+(.*)$").unwrap())
}

/// The full set of article records, sorted into canonical order at build
/// time and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ArticleCatalog {
    articles: Vec<Article>,
}

impl ArticleCatalog {
    /// Build the catalog from (source path, raw text) pairs.
    ///
    /// Deterministic given the same pairs in the same order. When two sources
    /// derive the same slug, the later one wins; the shadowed record is
    /// dropped with a warning.
    pub fn from_sources<I, P, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = (P, S)>,
        P: AsRef<str>,
        S: AsRef<str>,
    {
        let mut articles: Vec<Article> = Vec::new();

        for (path, raw) in sources {
            let article = build_article(path.as_ref(), raw.as_ref());
            if let Some(existing) = articles.iter_mut().find(|a| a.slug == article.slug) {
                tracing::warn!("Duplicate slug '{}', keeping the later source", article.slug);
                *existing = article;
            } else {
                articles.push(article);
            }
        }

        articles.sort_by(compare_articles);
        Self { articles }
    }

    /// Load every markdown file under `dir`. Files are visited sorted by
    /// name so the catalog is deterministic for a given document set.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let mut sources = Vec::new();

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_markdown = entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
            if !is_markdown {
                continue;
            }
            let raw = fs::read_to_string(entry.path())?;
            sources.push((entry.path().to_string_lossy().into_owned(), raw));
        }

        tracing::info!("Loaded {} markdown sources from {:?}", sources.len(), dir);
        Ok(Self::from_sources(sources))
    }

    /// All records in canonical order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Find a record by exact slug match.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Transform one raw document into an article record. Every fallback in the
/// chain resolves, so the record always carries a slug, title and
/// description.
fn build_article(path: &str, raw: &str) -> Article {
    let slug = slug_from_path(path);
    let sanitized = sanitize(raw);
    let (frontmatter, body) = parse_frontmatter(sanitized);

    let title = frontmatter
        .title
        .clone()
        .filter(|t| !t.trim().is_empty())
        .or_else(|| first_heading(&body))
        .unwrap_or_else(|| title_from_slug(&slug));

    let description = frontmatter
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| create_excerpt(&body));

    let reading_time = coerce_reading_time(frontmatter.reading_time_minutes.as_ref())
        .unwrap_or_else(|| reading_time_minutes(&body));

    let published = frontmatter.published_at.as_deref().and_then(parse_date);

    Article {
        slug,
        title,
        description,
        icon: frontmatter.icon,
        hero_image: frontmatter.hero_image,
        published_at: frontmatter.published_at,
        updated_at: frontmatter.updated_at,
        tags: coerce_tags(frontmatter.tags.as_ref()),
        reading_time_minutes: reading_time,
        content: body,
        order: coerce_order(frontmatter.order.as_ref()),
        published,
    }
}

fn first_heading(body: &str) -> Option<String> {
    heading_regex()
        .captures(body)
        .map(|captures| captures[1].trim().to_string())
        .filter(|title| !title.is_empty())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().or_else(|| {
        chrono::DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.date_naive())
    })
}

/// Total order over the catalog: explicit `order` ascending, then records
/// with an `order` before records without, then `publishedAt` descending,
/// then records with a `publishedAt` before records without, then title.
fn compare_articles(a: &Article, b: &Article) -> Ordering {
    match (a.order, b.order) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => match (a.published, b.published) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.title.cmp(&b.title),
        },
    }
}
