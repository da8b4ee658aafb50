//! Quote domain model.
//!
//! # Responsibility
//! - Define the `{text, author}` record persisted in the quotes document.
//! - Provide presence validation used by write paths.
//!
//! # Invariants
//! - Wire field order is `text`, then `author`.
//! - `validate()` only checks presence; it never rewrites content.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One quote and its attribution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// Quoted body, stored verbatim.
    pub text: String,
    /// Attribution, stored verbatim.
    pub author: String,
}

/// Validation error for quote write paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteValidationError {
    /// `text` is empty or whitespace only.
    EmptyText,
    /// `author` is empty or whitespace only.
    EmptyAuthor,
}

impl Display for QuoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "quote text must not be blank"),
            Self::EmptyAuthor => write!(f, "quote author must not be blank"),
        }
    }
}

impl Error for QuoteValidationError {}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Rejects quotes whose text or author is blank after trimming.
    ///
    /// Text is checked first, so a quote blank in both fields reports
    /// `EmptyText`.
    pub fn validate(&self) -> Result<(), QuoteValidationError> {
        if self.text.trim().is_empty() {
            return Err(QuoteValidationError::EmptyText);
        }
        if self.author.trim().is_empty() {
            return Err(QuoteValidationError::EmptyAuthor);
        }
        Ok(())
    }

    /// Single-line display form: `{text} - {author}`.
    pub fn display_line(&self) -> String {
        format!("{} - {}", self.text, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::{Quote, QuoteValidationError};

    #[test]
    fn validate_rejects_whitespace_only_fields() {
        assert_eq!(
            Quote::new("  \t", "someone").validate(),
            Err(QuoteValidationError::EmptyText)
        );
        assert_eq!(
            Quote::new("words", "\n").validate(),
            Err(QuoteValidationError::EmptyAuthor)
        );
        assert!(Quote::new(" words ", " someone ").validate().is_ok());
    }

    #[test]
    fn display_line_joins_with_dash() {
        let quote = Quote::new("Stay hungry", "Steve Jobs");
        assert_eq!(quote.display_line(), "Stay hungry - Steve Jobs");
    }
}
