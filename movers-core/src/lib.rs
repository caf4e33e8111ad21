//! # movers-core
//!
//! Article ingestion pipeline for the First Movers community platform.
//!
//! Markdown sources with optional front-matter are transformed once, at load
//! time, into an immutable catalog of article records. The catalog is queried
//! by slug or listed in canonical order; it is never mutated after
//! construction.

pub mod catalog;
pub mod excerpt;
pub mod frontmatter;
pub mod models;
pub mod slug;

pub use catalog::{ArticleCatalog, CatalogError};
pub use excerpt::FALLBACK_DESCRIPTION;
pub use frontmatter::parse_frontmatter;
pub use models::{Article, Frontmatter};
pub use slug::{slug_from_path, title_from_slug};
