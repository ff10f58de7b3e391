//! Command-line interface implementation for cicdgen.
//! Provides argument parsing using clap.

use crate::constants::{DEFAULT_BASE_PATH, DEFAULT_DUMP_PATH, DEFAULT_PROJECTS};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for cicdgen.
#[derive(Parser, Debug)]
#[command(author, version, about = "cicdgen: Jenkins configuration-as-code generator", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate the Jenkins configuration of every project (default)
    Generate {
        /// Directory containing one sub-directory per project
        #[arg(short, long, value_name = "DIR", default_value = DEFAULT_BASE_PATH)]
        base_path: PathBuf,

        /// Project to generate; may be repeated
        #[arg(short, long = "project", value_name = "NAME", default_values_t = DEFAULT_PROJECTS.map(String::from))]
        projects: Vec<String>,
    },
    /// Print a configuration file as indented JSON
    Dump {
        /// Configuration file to print
        #[arg(value_name = "PATH", default_value = DEFAULT_DUMP_PATH)]
        path: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Generate {
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            projects: DEFAULT_PROJECTS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Args {
    /// The subcommand to run; `generate` with its defaults when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
