//! Error handling for cicdgen.
//! Defines the error type and result alias used throughout the application.

use thiserror::Error;

/// Errors raised while loading, rendering or writing a project configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading the input or writing the output failed.
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// The input is not a well-formed YAML document.
    #[error("YAML parse error: {0}.")]
    YamlError(#[from] serde_yaml::Error),

    /// The configuration lacks an expected key or a key holds the wrong shape.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Substituting values into a template failed.
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Serializing the configuration tree to JSON failed.
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Prints the error to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
