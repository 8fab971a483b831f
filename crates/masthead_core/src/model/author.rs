//! Author domain model.
//!
//! # Responsibility
//! - Validate and hold the author name.
//! - Own the author's articles and coordinate two-sided registration.
//!
//! # Invariants
//! - `name` is never empty.
//! - The article list is append-only and keeps creation order.
//! - `add_article` either registers on both sides or changes nothing.
//! - Author and articles reference each other strongly; the graph only grows
//!   and is never torn down while the process runs.

use crate::model::article::Article;
use crate::model::error::{char_len, ValidationError};
use crate::model::magazine::Magazine;
use log::debug;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashSet};
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use uuid::Uuid;

/// Stable identifier for an author.
pub type AuthorId = Uuid;

struct AuthorRecord {
    id: AuthorId,
    name: String,
    articles: RefCell<Vec<Article>>,
}

/// Shared handle to one author.
///
/// Equality and hashing use `id` only.
#[derive(Clone)]
pub struct Author(Rc<AuthorRecord>);

impl Author {
    /// Creates an author with a generated stable ID.
    ///
    /// # Errors
    /// - `ValidationError::EmptyAuthorName` when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyAuthorName);
        }

        let id = Uuid::new_v4();
        debug!(
            "event=author_create module=author status=ok author_id={} name_chars={}",
            id,
            char_len(&name)
        );
        Ok(Self(Rc::new(AuthorRecord {
            id,
            name,
            articles: RefCell::new(Vec::new()),
        })))
    }

    pub fn id(&self) -> AuthorId {
        self.0.id
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the author's articles in creation order.
    pub fn articles(&self) -> Vec<Article> {
        self.0.articles.borrow().clone()
    }

    /// Returns distinct magazines written for, in order of first appearance.
    pub fn magazines(&self) -> Vec<Magazine> {
        let mut seen = HashSet::new();
        self.0
            .articles
            .borrow()
            .iter()
            .map(|article| article.magazine().clone())
            .filter(|magazine| seen.insert(magazine.id()))
            .collect()
    }

    /// Writes a new article for `magazine`.
    ///
    /// # Contract
    /// - The title is validated before either article list is touched.
    /// - On success the article is appended to this author and to `magazine`.
    ///
    /// # Errors
    /// - `ValidationError::TitleLength` when `title` is outside `[5, 50]`.
    pub fn add_article(
        &self,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Article, ValidationError> {
        let article = Article::new(self, magazine, title).map_err(|err| {
            debug!(
                "event=article_add module=author status=rejected author_id={} magazine_id={} reason={:?}",
                self.0.id,
                magazine.id(),
                err
            );
            err
        })?;

        self.0.articles.borrow_mut().push(article.clone());
        magazine.register(article.clone());

        debug!(
            "event=article_add module=author status=ok author_id={} magazine_id={} article_id={}",
            self.0.id,
            magazine.id(),
            article.id()
        );
        Ok(article)
    }

    /// Returns distinct categories of magazines written for.
    ///
    /// Returns `None` when the author has no articles, and never an empty set.
    pub fn topic_areas(&self) -> Option<BTreeSet<String>> {
        let articles = self.0.articles.borrow();
        if articles.is_empty() {
            return None;
        }

        Some(
            articles
                .iter()
                .map(|article| article.magazine().category().to_string())
                .collect(),
        )
    }
}

impl Debug for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Author")
            .field("id", &self.0.id)
            .field("name", &self.0.name)
            .field("article_count", &self.0.articles.borrow().len())
            .finish()
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}
