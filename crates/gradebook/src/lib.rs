//! `gradebook` - A bounded in-memory student registry
//!
//! This library provides a fixed-capacity registry of student records
//! (id, name, letter grade) with append, lookup by id, and text rendering.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod roster;
pub mod student;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use registry::Registry;
pub use student::{Grade, Student, MAX_NAME_LEN};
