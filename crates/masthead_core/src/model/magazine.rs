//! Magazine domain model.
//!
//! # Responsibility
//! - Validate and hold the magazine name and category.
//! - Answer contributor and title queries over published articles.
//!
//! # Invariants
//! - `name` length is within `[2, 16]` characters.
//! - `category` is never empty.
//! - Articles are only registered by `Author::add_article`, in call order.
//! - Every registered article resolves to a live author.

use crate::model::article::Article;
use crate::model::author::{Author, AuthorId};
use crate::model::error::{
    char_len, ValidationError, MAGAZINE_NAME_MAX_CHARS, MAGAZINE_NAME_MIN_CHARS,
};
use log::debug;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use uuid::Uuid;

/// Stable identifier for a magazine.
pub type MagazineId = Uuid;

/// Articles by one author strictly above this count make a contributing author.
pub const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

struct MagazineRecord {
    id: MagazineId,
    name: String,
    category: String,
    articles: RefCell<Vec<Article>>,
}

/// Shared handle to one magazine.
///
/// Equality and hashing use `id` only.
#[derive(Clone)]
pub struct Magazine(Rc<MagazineRecord>);

impl Magazine {
    /// Creates a magazine with a generated stable ID.
    ///
    /// # Errors
    /// - `ValidationError::MagazineNameLength` when `name` is outside `[2, 16]`.
    /// - `ValidationError::EmptyCategory` when `category` is empty.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();

        let name_len = char_len(&name);
        if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&name_len) {
            return Err(ValidationError::MagazineNameLength { len: name_len });
        }
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        let id = Uuid::new_v4();
        debug!(
            "event=magazine_create module=magazine status=ok magazine_id={} name_chars={}",
            id, name_len
        );
        Ok(Self(Rc::new(MagazineRecord {
            id,
            name,
            category,
            articles: RefCell::new(Vec::new()),
        })))
    }

    pub(crate) fn register(&self, article: Article) {
        self.0.articles.borrow_mut().push(article);
    }

    pub fn id(&self) -> MagazineId {
        self.0.id
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn category(&self) -> &str {
        &self.0.category
    }

    /// Returns articles in the order they were added, across all authors.
    pub fn articles(&self) -> Vec<Article> {
        self.0.articles.borrow().clone()
    }

    /// Returns distinct authors, in order of first appearance.
    pub fn contributors(&self) -> Vec<Author> {
        let mut seen = HashSet::new();
        self.0
            .articles
            .borrow()
            .iter()
            .map(|article| article.author().clone())
            .filter(|author| seen.insert(author.id()))
            .collect()
    }

    /// Returns titles in article order, or `None` when nothing is published.
    pub fn article_titles(&self) -> Option<Vec<String>> {
        let articles = self.0.articles.borrow();
        if articles.is_empty() {
            return None;
        }
        Some(
            articles
                .iter()
                .map(|article| article.title().to_string())
                .collect(),
        )
    }

    /// Returns authors with more than two articles in this magazine.
    pub fn contributing_authors(&self) -> Vec<Author> {
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        let mut order = Vec::new();
        for article in self.0.articles.borrow().iter() {
            let author = article.author();
            let count = counts.entry(author.id()).or_insert(0);
            if *count == 0 {
                order.push(author.clone());
            }
            *count += 1;
        }

        order
            .into_iter()
            .filter(|author| counts[&author.id()] > CONTRIBUTING_AUTHOR_THRESHOLD)
            .collect()
    }
}

impl Debug for Magazine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Magazine")
            .field("id", &self.0.id)
            .field("name", &self.0.name)
            .field("category", &self.0.category)
            .field("article_count", &self.0.articles.borrow().len())
            .finish()
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Magazine {}

impl Hash for Magazine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}
