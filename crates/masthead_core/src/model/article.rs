//! Article domain model.
//!
//! # Responsibility
//! - Join one author and one magazine under a validated title.
//! - Reject every attempt to reassign a field after construction.
//!
//! # Invariants
//! - `title` length is always within `[5, 50]` characters.
//! - `author` and `magazine` are bound once, at construction, and always
//!   resolve: the article keeps both entities alive.

use crate::model::author::Author;
use crate::model::error::{
    char_len, ArticleField, ImmutableFieldError, ValidationError, ARTICLE_TITLE_MAX_CHARS,
    ARTICLE_TITLE_MIN_CHARS,
};
use crate::model::magazine::Magazine;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use uuid::Uuid;

/// Stable identifier for an article.
pub type ArticleId = Uuid;

struct ArticleRecord {
    id: ArticleId,
    title: String,
    author: Author,
    magazine: Magazine,
}

/// Shared handle to one article.
///
/// Clones point at the same record; the same article is held by both its
/// author and its magazine.
#[derive(Clone)]
pub struct Article(Rc<ArticleRecord>);

impl Article {
    /// Builds a fully bound article after validating `title`.
    ///
    /// Only `Author::add_article` calls this, so registration on both sides
    /// cannot be skipped.
    ///
    /// # Errors
    /// - `ValidationError::TitleLength` when `title` is outside `[5, 50]`.
    pub(crate) fn new(
        author: &Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_title(&title)?;

        Ok(Self(Rc::new(ArticleRecord {
            id: Uuid::new_v4(),
            title,
            author: author.clone(),
            magazine: magazine.clone(),
        })))
    }

    pub fn id(&self) -> ArticleId {
        self.0.id
    }

    pub fn title(&self) -> &str {
        &self.0.title
    }

    pub fn author(&self) -> &Author {
        &self.0.author
    }

    pub fn magazine(&self) -> &Magazine {
        &self.0.magazine
    }

    /// Rejects reassigning the title.
    ///
    /// Articles are bound in one step by `Author::add_article`; there is no
    /// unbound phase, so this always returns `Err` and leaves the article as is.
    pub fn set_title(&self, _title: impl Into<String>) -> Result<(), ImmutableFieldError> {
        Err(self.rebind_rejected(ArticleField::Title))
    }

    /// Rejects reassigning the author. Always returns `Err`.
    pub fn set_author(&self, _author: &Author) -> Result<(), ImmutableFieldError> {
        Err(self.rebind_rejected(ArticleField::Author))
    }

    /// Rejects reassigning the magazine. Always returns `Err`.
    pub fn set_magazine(&self, _magazine: &Magazine) -> Result<(), ImmutableFieldError> {
        Err(self.rebind_rejected(ArticleField::Magazine))
    }

    fn rebind_rejected(&self, field: ArticleField) -> ImmutableFieldError {
        log::warn!(
            "event=article_rebind module=article status=rejected article_id={} field={}",
            self.0.id,
            field.as_str()
        );
        ImmutableFieldError { field }
    }
}

// Author and magazine print as ids; their article lists point back here.
impl Debug for Article {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Article")
            .field("id", &self.0.id)
            .field("title", &self.0.title)
            .field("author_id", &self.0.author.id())
            .field("magazine_id", &self.0.magazine.id())
            .finish()
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Article {}

impl Hash for Article {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = char_len(title);
    if !(ARTICLE_TITLE_MIN_CHARS..=ARTICLE_TITLE_MAX_CHARS).contains(&len) {
        return Err(ValidationError::TitleLength { len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_title;
    use crate::model::error::{ArticleField, ImmutableFieldError, ValidationError};
    use crate::{Author, Magazine};

    fn fixture() -> (Author, Magazine) {
        (
            Author::new("Ada").expect("valid author"),
            Magazine::new("Byte", "Computing").expect("valid magazine"),
        )
    }

    #[test]
    fn validate_title_enforces_inclusive_bounds() {
        assert_eq!(
            validate_title("abcd"),
            Err(ValidationError::TitleLength { len: 4 })
        );
        assert!(validate_title("abcde").is_ok());
        assert!(validate_title(&"x".repeat(50)).is_ok());
        assert_eq!(
            validate_title(&"x".repeat(51)),
            Err(ValidationError::TitleLength { len: 51 })
        );
    }

    #[test]
    fn every_field_rejects_rebinding() {
        let (author, magazine) = fixture();
        let other_author = Author::new("Grace").expect("valid author");
        let article = author
            .add_article(&magazine, "Valid Title")
            .expect("valid article");

        assert_eq!(
            article.set_title("Another Title"),
            Err(ImmutableFieldError {
                field: ArticleField::Title
            })
        );
        assert_eq!(
            article.set_author(&other_author),
            Err(ImmutableFieldError {
                field: ArticleField::Author
            })
        );
        assert_eq!(
            article.set_magazine(&magazine),
            Err(ImmutableFieldError {
                field: ArticleField::Magazine
            })
        );

        assert_eq!(article.title(), "Valid Title");
        assert_eq!(article.author(), &author);
    }

    #[test]
    fn references_resolve_to_same_entities() {
        let (author, magazine) = fixture();
        let article = author
            .add_article(&magazine, "Pointers and You")
            .expect("valid article");

        assert_eq!(article.author().id(), author.id());
        assert_eq!(article.magazine().id(), magazine.id());
    }

    #[test]
    fn debug_output_does_not_recurse_through_the_graph() {
        let (author, magazine) = fixture();
        let article = author
            .add_article(&magazine, "Pointers and You")
            .expect("valid article");

        let rendered = format!("{article:?} {author:?} {magazine:?}");
        assert!(rendered.contains("author_id"));
        assert!(rendered.contains("article_count: 1"));
    }
}
