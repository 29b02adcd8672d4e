//! List (column) domain model
//!
//! A list is a named column. Its position on the board is its index in the
//! board's list sequence; there is no separate rank field.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::ListId;

/// Message shown next to the new-list input when the title is rejected
pub const LIST_TITLE_HINT: &str =
    "Title can contain letters and numbers only and should not be empty.";

/// Why a new list title was rejected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListTitleError {
    #[error("{}", LIST_TITLE_HINT)]
    Empty,

    #[error("{} (got '{}')", LIST_TITLE_HINT, .0)]
    InvalidCharacters(String),
}

/// Validates the title of a list about to be created
///
/// Accepts ASCII letters, digits and whitespace, and requires at least one
/// non-whitespace character. Renaming an existing list is not validated.
pub fn validate_list_title(title: &str) -> Result<(), ListTitleError> {
    if !title
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
    {
        return Err(ListTitleError::InvalidCharacters(title.to_string()));
    }

    if title.trim().is_empty() {
        return Err(ListTitleError::Empty);
    }

    Ok(())
}

/// A column on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// Unique identifier
    pub id: ListId,

    /// Column heading; also the status label of every task in the column
    pub title: String,
}

impl List {
    pub fn new(id: ListId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_digits_and_spaces() {
        assert!(validate_list_title("To do").is_ok());
        assert!(validate_list_title("Sprint 42").is_ok());
        assert!(validate_list_title("Review\tqueue").is_ok());
    }

    #[test]
    fn rejects_empty_and_blank_titles() {
        assert_eq!(validate_list_title(""), Err(ListTitleError::Empty));
        assert_eq!(validate_list_title("   "), Err(ListTitleError::Empty));
    }

    #[test]
    fn rejects_punctuation_and_symbols() {
        assert_eq!(
            validate_list_title("@@@"),
            Err(ListTitleError::InvalidCharacters("@@@".to_string()))
        );
        assert!(validate_list_title("Done!").is_err());
        assert!(validate_list_title("in-progress").is_err());
    }

    #[test]
    fn rejects_non_ascii_letters() {
        assert!(validate_list_title("Готово").is_err());
    }

    #[test]
    fn error_message_carries_the_hint() {
        let err = validate_list_title("").unwrap_err();
        assert_eq!(err.to_string(), LIST_TITLE_HINT);

        let err = validate_list_title("@@@").unwrap_err();
        assert_eq!(err.to_string(), format!("{LIST_TITLE_HINT} (got '@@@')"));
    }
}
