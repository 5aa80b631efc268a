//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::student::Grade;

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Find command arguments.
#[derive(Debug, Args)]
pub struct FindCommand {
    /// The student id to look up
    pub id: i64,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// The student id (uniqueness is not enforced)
    #[arg(short, long)]
    pub id: i64,

    /// The student name (long names are truncated)
    #[arg(short, long)]
    pub name: String,

    /// The letter grade
    #[arg(short, long, value_enum)]
    pub grade: GradeArg,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Letter grade argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GradeArg {
    /// Excellent
    A,
    /// Good
    B,
    /// Satisfactory
    C,
    /// Poor
    D,
    /// Failing
    F,
}

impl From<GradeArg> for Grade {
    fn from(arg: GradeArg) -> Self {
        match arg {
            GradeArg::A => Self::A,
            GradeArg::B => Self::B,
            GradeArg::C => Self::C,
            GradeArg::D => Self::D,
            GradeArg::F => Self::F,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_arg_conversion() {
        assert_eq!(Grade::from(GradeArg::A), Grade::A);
        assert_eq!(Grade::from(GradeArg::B), Grade::B);
        assert_eq!(Grade::from(GradeArg::C), Grade::C);
        assert_eq!(Grade::from(GradeArg::D), Grade::D);
        assert_eq!(Grade::from(GradeArg::F), Grade::F);
    }

    #[test]
    fn test_list_command_debug() {
        let cmd = ListCommand { json: true };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("json"));
    }

    #[test]
    fn test_find_command_debug() {
        let cmd = FindCommand { id: 3, json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("id"));
        assert!(debug_str.contains('3'));
    }

    #[test]
    fn test_add_command_debug() {
        let cmd = AddCommand {
            id: 11,
            name: "Kara".to_string(),
            grade: GradeArg::B,
            json: false,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Kara"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }

    #[test]
    fn test_grade_arg_clone() {
        let arg = GradeArg::D;
        let cloned = arg;
        assert_eq!(arg, cloned);
    }
}
