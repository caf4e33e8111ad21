//! CLI command implementations.

pub mod list;
pub mod show;

pub use list::list_articles;
pub use show::show_article;
