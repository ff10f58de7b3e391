//! cicdgen renders YAML project configurations into Jenkins
//! configuration-as-code files (JCasC with embedded Job DSL scripts).

/// Command-line interface module for the cicdgen application
pub mod cli;

/// Repository, job and project definitions read from a configuration tree
pub mod config;

/// Default paths, naming conventions and placeholder values
pub mod constants;

/// Batch generation over the configured project list
/// Reads `<base>/<project>/<project>.yaml` and writes
/// `<base>/<project>/jenkins_<project>.yaml`
pub mod driver;

/// Configuration printed as indented JSON for debugging
pub mod dump;

/// Error types and handling for the cicdgen application
pub mod error;

/// Jenkins file generation from a project configuration
pub mod jenkins;

/// YAML configuration loading
pub mod loader;

/// Log backend initialisation
pub mod logger;

/// Template rendering engine
pub mod renderer;

/// Generated content output
pub mod writer;
