//! `gradebook` - CLI for the student registry
//!
//! This binary seeds the sample roster into a fixed-capacity registry and
//! exposes the registry operations as subcommands.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;

use gradebook::cli::{AddCommand, Cli, Command, ConfigCommand, FindCommand, ListCommand};
use gradebook::roster;
use gradebook::{init_logging, Config, Registry, Student};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::List(list_cmd) => handle_list(&config, &list_cmd),
        Command::Find(find_cmd) => handle_find(&config, &find_cmd),
        Command::Add(add_cmd) => handle_add(&config, &add_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

/// Build a registry of the configured capacity seeded with the sample roster.
fn seeded_registry(config: &Config) -> Registry {
    let mut registry = Registry::with_capacity(config.capacity());
    roster::seed(&mut registry);
    registry
}

fn handle_list(config: &Config, cmd: &ListCommand) -> Result<(), Box<dyn std::error::Error>> {
    let registry = seeded_registry(config);

    if cmd.json {
        let students: Vec<&Student> = registry.iter().collect();
        println!("{}", serde_json::to_string_pretty(&students)?);
    } else {
        println!("All students:");
        println!("{}", registry.render_all());
    }
    Ok(())
}

fn handle_find(config: &Config, cmd: &FindCommand) -> Result<(), Box<dyn std::error::Error>> {
    let registry = seeded_registry(config);

    match registry.find_by_id(cmd.id) {
        Some(student) => {
            if cmd.json {
                println!("{}", serde_json::to_string_pretty(student)?);
            } else {
                println!("{student}");
            }
        }
        None => {
            if cmd.json {
                println!("null");
            } else {
                println!("No student found with id {}.", cmd.id);
            }
        }
    }
    Ok(())
}

fn handle_add(config: &Config, cmd: &AddCommand) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = seeded_registry(config);
    let student = Student::new(cmd.id, cmd.name.clone(), cmd.grade.into());

    match registry.append(student) {
        Ok(()) => {
            // The appended record, as stored (name possibly truncated)
            let added = registry
                .iter()
                .last()
                .ok_or("registry empty after append")?;
            if cmd.json {
                println!("{}", serde_json::to_string_pretty(added)?);
            } else {
                println!("Added student:");
                println!("{added}");
            }
        }
        // Capacity exhaustion is a notice, not a failure
        Err(err) if err.is_full() => {
            println!("Registry is full. Cannot add more students.");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Registry]");
                println!("  Capacity:  {}", config.capacity());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
