//! In-memory publishing model: authors, magazines and the articles joining them.
//!
//! # Responsibility
//! - Define the three entities and their validation rules.
//! - Keep both sides of the author/magazine relationship consistent.
//!
//! # Invariants
//! - Every entity is identified by a stable `Uuid`.
//! - Articles are created only through `Author::add_article`.
//! - Handles are `Rc`-based; the model is single-threaded.

pub mod article;
pub mod author;
pub mod error;
pub mod magazine;
