//! Debug view of a configuration file as indented JSON.

use crate::error::Result;
use crate::loader::{parse, ConfigTree};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

const JSON_INDENT: &[u8] = b"   ";

/// Text used for a mapping key in JSON. Non-string scalars use their YAML
/// spelling in JSON form, so `~` becomes `"null"` and `1` becomes `"1"`.
fn json_key(key: &ConfigTree) -> String {
    match key {
        ConfigTree::String(s) => s.clone(),
        ConfigTree::Null => "null".to_string(),
        ConfigTree::Bool(b) => b.to_string(),
        ConfigTree::Number(n) => n.to_string(),
        other => to_json(other).to_string(),
    }
}

/// Converts a configuration tree into JSON, keeping mapping order and
/// dropping YAML tags.
fn to_json(value: &ConfigTree) -> serde_json::Value {
    match value {
        ConfigTree::Null => serde_json::Value::Null,
        ConfigTree::Bool(b) => serde_json::Value::Bool(*b),
        ConfigTree::Number(n) => {
            if let Some(i) = n.as_i64() {
                serde_json::Value::from(i)
            } else if let Some(u) = n.as_u64() {
                serde_json::Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null)
            }
        }
        ConfigTree::String(s) => serde_json::Value::String(s.clone()),
        ConfigTree::Sequence(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        ConfigTree::Mapping(map) => serde_json::Value::Object(
            map.iter().map(|(k, v)| (json_key(k), to_json(v))).collect(),
        ),
        ConfigTree::Tagged(tagged) => to_json(&tagged.value),
    }
}

/// Loads the YAML file at `path` and returns it as JSON indented by three
/// spaces, keeping the key order of the document.
///
/// # Errors
/// * `Error::IoError` if the file cannot be read
/// * `Error::YamlError` if the file is not well-formed YAML
pub fn dump_config<P: AsRef<Path>>(path: P) -> Result<String> {
    let tree = to_json(&parse(path)?);

    let mut out = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(JSON_INDENT));
    tree.serialize(&mut serializer)?;

    Ok(String::from_utf8_lossy(&out).into_owned())
}
