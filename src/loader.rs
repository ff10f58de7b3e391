//! Project configuration loading for cicdgen.
//! Reads a YAML document from disk into an untyped tree of mappings,
//! sequences and scalars.
use crate::error::Result;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed configuration document, kept exactly as YAML produced it.
pub type ConfigTree = serde_yaml::Value;

/// Trait for loading configuration trees from different sources.
pub trait ConfigLoader {
    /// Loads and parses the configuration.
    ///
    /// # Returns
    /// * `Result<ConfigTree>` - The parsed document
    fn load(&self) -> Result<ConfigTree>;
}

/// Loader for YAML files on the local filesystem.
pub struct YamlFileLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> YamlFileLoader<P> {
    /// Creates a new YamlFileLoader instance.
    pub fn new(path: P) -> Self {
        Self { path }
    }

    /// Path this loader reads from.
    pub fn path(&self) -> PathBuf {
        self.path.as_ref().to_path_buf()
    }
}

impl<P: AsRef<Path>> ConfigLoader for YamlFileLoader<P> {
    /// Reads the file and parses it as YAML.
    ///
    /// # Errors
    /// * `Error::IoError` if the file cannot be read
    /// * `Error::YamlError` if the content is not well-formed YAML or a
    ///   merge key does not refer to a mapping
    fn load(&self) -> Result<ConfigTree> {
        let path = self.path.as_ref();
        debug!("Loading configuration from '{}'.", path.display());

        let content = fs::read_to_string(path)?;
        let mut tree: ConfigTree = serde_yaml::from_str(&content)?;
        // `<<: *anchor` entries are folded into their mapping.
        tree.apply_merge()?;

        Ok(tree)
    }
}

/// Parses the YAML file at `path` into a configuration tree.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<ConfigTree> {
    YamlFileLoader::new(path).load()
}
