//! Masthead: authors, the magazines they write for, and the articles in between.
//!
//! Entities are validated on construction and articles are created only via
//! [`Author::add_article`], which records each article on both sides.

pub mod logging;
pub mod model;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LogSettings};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::error::{
    ArticleField, ImmutableFieldError, ModelError, ModelResult, ValidationError,
};
pub use model::magazine::{Magazine, MagazineId, CONTRIBUTING_AUTHOR_THRESHOLD};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
