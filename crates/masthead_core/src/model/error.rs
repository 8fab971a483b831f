//! Error types for model construction and field binding.
//!
//! # Invariants
//! - Errors are returned before any state is mutated.
//! - Error messages carry lengths, never the rejected text itself.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Inclusive bounds for magazine name length, in characters.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// Inclusive bounds for article title length, in characters.
pub const ARTICLE_TITLE_MIN_CHARS: usize = 5;
pub const ARTICLE_TITLE_MAX_CHARS: usize = 50;

/// Input value violates a length or emptiness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name has zero characters.
    EmptyAuthorName,
    /// Magazine name length is outside `[2, 16]`.
    MagazineNameLength { len: usize },
    /// Magazine category has zero characters.
    EmptyCategory,
    /// Article title length is outside `[5, 50]`.
    TitleLength { len: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "author name must be non-empty"),
            Self::MagazineNameLength { len } => write!(
                f,
                "magazine name must be {MAGAZINE_NAME_MIN_CHARS}..={MAGAZINE_NAME_MAX_CHARS} characters, got {len}"
            ),
            Self::EmptyCategory => write!(f, "magazine category must be non-empty"),
            Self::TitleLength { len } => write!(
                f,
                "article title must be {ARTICLE_TITLE_MIN_CHARS}..={ARTICLE_TITLE_MAX_CHARS} characters, got {len}"
            ),
        }
    }
}

impl Error for ValidationError {}

/// Article field identifiers used in binding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleField {
    Title,
    Author,
    Magazine,
}

impl ArticleField {
    /// Stable lowercase field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Magazine => "magazine",
        }
    }
}

/// Attempt to rebind an article field that is already bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImmutableFieldError {
    pub field: ArticleField,
}

impl Display for ImmutableFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "article field `{}` is already bound and cannot be modified",
            self.field.as_str()
        )
    }
}

impl Error for ImmutableFieldError {}

pub type ModelResult<T> = Result<T, ModelError>;

/// Umbrella error for callers mixing construction and binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    Validation(ValidationError),
    ImmutableField(ImmutableFieldError),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::ImmutableField(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::ImmutableField(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ModelError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ImmutableFieldError> for ModelError {
    fn from(value: ImmutableFieldError) -> Self {
        Self::ImmutableField(value)
    }
}

pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::{char_len, ArticleField, ImmutableFieldError, ModelError, ValidationError};
    use std::error::Error;

    #[test]
    fn char_len_counts_scalar_values_not_bytes() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn messages_report_lengths() {
        let message = ValidationError::TitleLength { len: 3 }.to_string();
        assert!(message.contains("5..=50"));
        assert!(message.contains("got 3"));

        let message = ImmutableFieldError {
            field: ArticleField::Title,
        }
        .to_string();
        assert!(message.contains("`title`"));
    }

    #[test]
    fn model_error_wraps_sources() {
        let err: ModelError = ValidationError::EmptyCategory.into();
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "magazine category must be non-empty");
    }
}
