//! Jenkins configuration-as-code generation.
//!
//! The output is a JCasC document whose `jobs` section holds one Job DSL
//! `multibranchPipelineJob` script per configured Jenkins job, in the order
//! the jobs are listed.

use crate::config::{JenkinsJob, ProjectConfig, ResolvedRepository};
use crate::constants::BRANCHES_EXCLUDE;
use crate::error::Result;
use crate::loader::ConfigTree;
use crate::renderer::TemplateRenderer;
use crate::writer::ContentGenerator;
use log::debug;
use serde_json::json;

/// System settings and tool installations. Only the description comes from
/// the project configuration.
pub const HEADER_TEMPLATE: &str = r#"jenkins:
  systemMessage: "{{ description }}"
tool:
  git:
    installations:
    - home: "git"
      name: "Default"
  maven:
    installations:
    - name: "Maven 3"
      properties:
      - installSource:
          installers:
            - maven:
                id: "3.5.4"
jobs:
"#;

/// One `multibranchPipelineJob` entry of the `jobs` list.
pub const JOB_TEMPLATE: &str = r#"  - script: >
      multibranchPipelineJob("{{ name }}")
      {
          displayName("{{ name }}")
          branchSources {
              git {
                  id('{{ name }}')
                  remote('{{ url }}')
                  credentialsId('{{ credential }}')
                  includes('{{ branches_include }}')
                  excludes('{{ branches_exclude }}')
              }
          }
          triggers {
              periodic({{ trigger_period }})
          }
      }
"#;

/// Renders a [`ProjectConfig`] into a Jenkins configuration file.
pub struct JenkinsGenerator<'a> {
    config: ProjectConfig,
    engine: &'a dyn TemplateRenderer,
}

impl<'a> JenkinsGenerator<'a> {
    /// Creates a generator rendering `config` with `engine`.
    pub fn new(config: ProjectConfig, engine: &'a dyn TemplateRenderer) -> Self {
        Self { config, engine }
    }

    /// Builds a generator straight from a loaded configuration tree.
    ///
    /// # Errors
    /// * `Error::ConfigError` if `project`, `repositories` or `jenkins_jobs`
    ///   (or one of their fields) is missing
    pub fn from_tree(tree: &ConfigTree, engine: &'a dyn TemplateRenderer) -> Result<Self> {
        Ok(Self::new(ProjectConfig::from_tree(tree)?, engine))
    }

    /// The configuration being rendered.
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Renders the system settings section, ending with the `jobs:` key.
    pub fn render_header(&self) -> Result<String> {
        let context = json!({
            "description": self.config.project.description,
        });
        self.engine.render(HEADER_TEMPLATE, &context)
    }

    /// Renders the Job DSL block of a single job.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the referenced repository lacks `url` or `credential`
    pub fn render_job(&self, job: &JenkinsJob) -> Result<String> {
        let repo = ResolvedRepository::resolve(&self.config, job)?;
        let context = json!({
            "name": job.name,
            "url": repo.url,
            "credential": repo.credential,
            "branches_include": job.branches_include,
            "branches_exclude": BRANCHES_EXCLUDE,
            "trigger_period": job.trigger_period,
        });
        self.engine.render(JOB_TEMPLATE, &context)
    }
}

impl ContentGenerator for JenkinsGenerator<'_> {
    fn content(&self) -> Result<String> {
        debug!(
            "Rendering project '{}' with {} job(s).",
            self.config.project.name,
            self.config.jenkins_jobs.len()
        );

        let mut content = self.render_header()?;
        for job in &self.config.jenkins_jobs {
            content.push_str(&self.render_job(job)?);
        }
        Ok(content)
    }
}
