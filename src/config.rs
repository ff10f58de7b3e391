//! Typed view of a project configuration.
//! This module turns a loaded [`ConfigTree`] into projects, repositories and
//! Jenkins jobs, and resolves job references against the repository list.

use crate::constants::{MISSING_CREDENTIAL, MISSING_URL};
use crate::error::{Error, Result};
use crate::loader::ConfigTree;
use log::{debug, warn};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Accepts any YAML scalar and keeps its text form.
fn scalar<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Null => Err(D::Error::custom("expected a scalar value, found null")),
        _ => Err(D::Error::custom("expected a scalar value, found a sequence or mapping")),
    }
}

/// Like [`scalar`], but an absent or null value is `None`.
fn optional_scalar<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_yaml::Value>::deserialize(deserializer)? {
        None | Some(serde_yaml::Value::Null) => Ok(None),
        Some(value) => scalar(value).map(Some).map_err(D::Error::custom),
    }
}

/// Name and description of the generated Jenkins instance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "scalar")]
    pub name: String,
    #[serde(deserialize_with = "scalar")]
    pub description: String,
}

/// A source repository jobs can refer to by name.
///
/// `url` and `credential` are only required once a job resolves to the
/// repository, so leftover entries do not break a configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    #[serde(deserialize_with = "scalar")]
    pub name: String,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub credential: Option<String>,
}

impl Repository {
    fn required<'a>(&self, field: &'static str, value: &'a Option<String>) -> Result<&'a str> {
        value.as_deref().ok_or_else(|| {
            Error::ConfigError(format!("missing field `{field}` in repository `{}`", self.name))
        })
    }
}

/// A multibranch pipeline job. `repository` names an entry of
/// [`ProjectConfig::repositories`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JenkinsJob {
    #[serde(deserialize_with = "scalar")]
    pub name: String,
    #[serde(deserialize_with = "scalar")]
    pub repository: String,
    #[serde(deserialize_with = "scalar")]
    pub branches_include: String,
    #[serde(deserialize_with = "scalar")]
    pub trigger_period: String,
}

/// Root of a project configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectConfig {
    pub project: Project,
    pub repositories: Vec<Repository>,
    pub jenkins_jobs: Vec<JenkinsJob>,
}

impl ProjectConfig {
    /// Builds the typed configuration from a loaded tree.
    ///
    /// # Errors
    /// * `Error::ConfigError` if a required key is missing or holds a
    ///   sequence, mapping or null where a scalar is expected
    pub fn from_tree(tree: &ConfigTree) -> Result<Self> {
        serde_yaml::from_value(tree.clone()).map_err(|e| Error::ConfigError(e.to_string()))
    }

    /// Returns the first repository named exactly `name`.
    pub fn lookup_repository(&self, name: &str) -> Option<&Repository> {
        self.repositories.iter().find(|repo| repo.name == name)
    }
}

/// URL and credential a job block is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRepository {
    pub url: String,
    pub credential: String,
}

impl ResolvedRepository {
    /// Placeholder used when a job names a repository that does not exist.
    pub fn missing() -> Self {
        Self { url: MISSING_URL.to_string(), credential: MISSING_CREDENTIAL.to_string() }
    }

    /// Resolves the repository `job` refers to, falling back to
    /// [`ResolvedRepository::missing`] so a broken reference shows up in the
    /// generated file instead of aborting the run.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the matched repository has no `url` or `credential`
    pub fn resolve(config: &ProjectConfig, job: &JenkinsJob) -> Result<Self> {
        match config.lookup_repository(&job.repository) {
            Some(repo) => {
                let url = repo.required("url", &repo.url)?;
                let credential = repo.required("credential", &repo.credential)?;
                debug!("Job '{}' uses repository '{}' ({}).", job.name, repo.name, url);
                Ok(Self { url: url.to_string(), credential: credential.to_string() })
            }
            None => {
                warn!(
                    "Job '{}' references unknown repository '{}'.",
                    job.name, job.repository
                );
                Ok(Self::missing())
            }
        }
    }
}
