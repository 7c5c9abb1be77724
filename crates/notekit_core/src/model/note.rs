//! Note value model.
//!
//! # Invariants
//! - A `Note` is always trimmed and never empty.
//! - Deserialization enforces the same rule. The note slot loader decodes
//!   plain strings first so one blank entry does not sink the whole slot.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for note input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Input is empty or whitespace-only.
    Empty,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "note cannot be empty"),
        }
    }
}

impl Error for NoteValidationError {}

/// One trimmed, non-empty note.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note(String);

impl Note {
    /// Trims `input` and wraps it as a note.
    pub fn parse(input: &str) -> Result<Self, NoteValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(NoteValidationError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Note {
    type Error = NoteValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().len() == value.len() && !value.is_empty() {
            return Ok(Self(value));
        }
        Self::parse(&value)
    }
}

impl From<Note> for String {
    fn from(value: Note) -> Self {
        value.0
    }
}

impl AsRef<str> for Note {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, NoteValidationError};

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let note = Note::parse("  buy milk \n").expect("note should parse");
        assert_eq!(note.as_str(), "buy milk");
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert_eq!(Note::parse(""), Err(NoteValidationError::Empty));
        assert_eq!(Note::parse(" \t "), Err(NoteValidationError::Empty));
    }

    #[test]
    fn deserialize_rejects_blank_string() {
        let err = serde_json::from_str::<Vec<Note>>(r#"["ok", "   "]"#).unwrap_err();
        assert!(err.to_string().contains("note cannot be empty"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let notes = vec![Note::parse("a").unwrap(), Note::parse("b").unwrap()];
        assert_eq!(serde_json::to_string(&notes).unwrap(), r#"["a","b"]"#);
    }
}
