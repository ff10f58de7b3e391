//! Writing generated content to disk.

use crate::error::Result;
use log::debug;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Anything that can produce the text of a generated file.
pub trait ContentGenerator {
    /// Produces the full file content.
    fn content(&self) -> Result<String>;
}

/// Creates or truncates `path` and writes `content` into it.
///
/// Parent directories are not created; a missing parent is an `IoError`.
pub fn write_file<P: AsRef<Path>>(content: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    debug!("Wrote {} bytes to '{}'.", content.len(), path.display());
    Ok(())
}

/// Writes the content of `generator` to `path` and reports the result.
///
/// # Errors
/// * Whatever `generator` fails with
/// * `Error::IoError` if the file cannot be written
pub fn save<P: AsRef<Path>>(generator: &dyn ContentGenerator, path: P) -> Result<()> {
    let path = path.as_ref();
    let content = generator.content()?;
    write_file(&content, path)?;
    println!("Wrote to file [{}] successfully", path.display());
    Ok(())
}
