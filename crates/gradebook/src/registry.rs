//! Bounded in-memory registry of student records.
//!
//! This module provides the registry holding student records in insertion
//! order, with append, lookup by id, and text rendering.

use tracing::debug;

use crate::error::{Error, Result};
use crate::student::Student;

/// A bounded, ordered collection of student records.
///
/// The registry is an owned value with its capacity fixed at construction.
/// It grows only via [`Registry::append`] and never shrinks; the length
/// never exceeds the capacity.
#[derive(Debug, Clone)]
pub struct Registry {
    /// Maximum number of records this registry will hold.
    capacity: usize,
    /// Records in insertion order.
    students: Vec<Student>,
}

impl Registry {
    /// Create an empty registry that holds at most `capacity` records.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            students: Vec::with_capacity(capacity),
        }
    }

    /// Append a record at the end of the registry.
    ///
    /// Duplicate ids are accepted; lookups return the first match.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegistryFull`] if the registry is at capacity.
    /// The registry is left unchanged in that case.
    pub fn append(&mut self, student: Student) -> Result<()> {
        if self.is_full() {
            return Err(Error::RegistryFull {
                capacity: self.capacity,
            });
        }

        debug!("Appending student with id {}", student.id);
        self.students.push(student);
        Ok(())
    }

    /// Find a record by id.
    ///
    /// Scans in insertion order and returns the first record whose id
    /// matches, or `None` if no record matches.
    #[must_use]
    pub fn find_by_id(&self, id: i64) -> Option<&Student> {
        self.students.iter().find(|student| student.id == id)
    }

    /// Render every record in insertion order.
    ///
    /// Records are rendered as three-line blocks separated by blank lines.
    /// Returns an empty string for an empty registry.
    #[must_use]
    pub fn render_all(&self) -> String {
        self.students
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Number of records currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Check whether the registry holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Check whether the registry is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.students.len() >= self.capacity
    }

    /// Maximum number of records this registry will hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}
