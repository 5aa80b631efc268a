//! Sample class roster.
//!
//! The registry has no persistence, so the CLI commands all operate on
//! this fixed ten-student roster.

use tracing::{info, warn};

use crate::registry::Registry;
use crate::student::{Grade, Student};

/// The fixed sample roster of ten students.
#[must_use]
pub fn sample_roster() -> Vec<Student> {
    vec![
        Student::new(1, "Allison", Grade::A),
        Student::new(2, "Bob", Grade::B),
        Student::new(3, "Charlie", Grade::C),
        Student::new(4, "Diana", Grade::A),
        Student::new(5, "Eve", Grade::B),
        Student::new(6, "Frank", Grade::F),
        Student::new(7, "Grace", Grade::D),
        Student::new(8, "Hannah", Grade::C),
        Student::new(9, "Ian", Grade::A),
        Student::new(10, "Jack", Grade::B),
    ]
}

/// Seed a registry with the sample roster.
///
/// Records that do not fit are dropped with a warning; seeding never
/// fails. Returns the number of records appended.
pub fn seed(registry: &mut Registry) -> usize {
    let roster = sample_roster();
    let total = roster.len();

    let mut appended = 0;
    for student in roster {
        let id = student.id;
        match registry.append(student) {
            Ok(()) => appended += 1,
            Err(err) => {
                warn!("Dropping roster record with id {}: {}", id, err);
            }
        }
    }

    info!("Seeded {} of {} roster records", appended, total);
    appended
}
