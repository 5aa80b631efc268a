//! Core record types for gradebook.
//!
//! This module defines the student record and the letter grade assigned
//! to it.

use serde::{Deserialize, Serialize};

/// Maximum number of characters a student name may occupy when stored
/// or rendered. Longer names are truncated silently.
pub const MAX_NAME_LEN: usize = 49;

/// A letter grade assigned to a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    /// Excellent.
    A,
    /// Good.
    B,
    /// Satisfactory.
    C,
    /// Poor.
    D,
    /// Failing.
    F,
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
            Self::D => write!(f, "D"),
            Self::F => write!(f, "F"),
        }
    }
}

/// A single student record.
///
/// Records are owned by the registry that stores them; the id is
/// caller-supplied and uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Caller-supplied identifier.
    pub id: i64,

    /// Display name, at most [`MAX_NAME_LEN`] characters.
    pub name: String,

    /// The assigned letter grade.
    pub grade: Grade,
}

impl Student {
    /// Create a new student record.
    ///
    /// Names longer than [`MAX_NAME_LEN`] characters are truncated on a
    /// character boundary; this is silent, not an error.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, grade: Grade) -> Self {
        Self {
            id,
            name: truncate_name(&name.into()),
            grade,
        }
    }
}

impl std::fmt::Display for Student {
    /// Renders the record as a three-line block:
    ///
    /// ```text
    /// ID: 1
    /// Name: Allison
    /// Grade: A
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        write!(f, "Grade: {}", self.grade)
    }
}

/// Truncate a name to [`MAX_NAME_LEN`] characters.
///
/// Counts characters rather than bytes so multi-byte names are never
/// split mid-character.
fn truncate_name(name: &str) -> String {
    match name.char_indices().nth(MAX_NAME_LEN) {
        Some((idx, _)) => name[..idx].to_string(),
        None => name.to_string(),
    }
}
