//! Batch generation over a list of projects.
//!
//! Every project lives in its own directory under the base path:
//! `<base>/<project>/<project>.yaml` is read and
//! `<base>/<project>/jenkins_<project>.yaml` is written.

use crate::constants::{
    CONFIG_EXTENSION, DEFAULT_BASE_PATH, DEFAULT_PROJECTS, JENKINS_OUTPUT_PREFIX,
};
use crate::error::Result;
use crate::jenkins::JenkinsGenerator;
use crate::loader::parse;
use crate::renderer::TemplateRenderer;
use crate::writer::save;
use log::info;
use std::path::{Path, PathBuf};

/// Generates Jenkins files for a fixed list of projects under one base path.
pub struct Driver {
    base_path: PathBuf,
    projects: Vec<String>,
}

impl Driver {
    pub fn new<P: Into<PathBuf>>(base_path: P, projects: Vec<String>) -> Self {
        Self { base_path: base_path.into(), projects }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    /// Returns the input configuration path and the Jenkins output path of `project`.
    pub fn project_paths(&self, project: &str) -> (PathBuf, PathBuf) {
        let project_dir = self.base_path.join(project);
        let input_name = format!("{project}.{CONFIG_EXTENSION}");
        let output_name = format!("{JENKINS_OUTPUT_PREFIX}{input_name}");

        (project_dir.join(input_name), project_dir.join(output_name))
    }

    /// Generates the Jenkins file of every project in order.
    ///
    /// # Errors
    /// The first failing project stops the run; its error is returned and
    /// the remaining projects are not processed.
    pub fn run(&self, engine: &dyn TemplateRenderer) -> Result<()> {
        for project in &self.projects {
            let (input, output) = self.project_paths(project);
            info!("Generating project '{}' from '{}'.", project, input.display());

            let tree = parse(&input)?;
            let generator = JenkinsGenerator::from_tree(&tree, engine)?;
            save(&generator, &output)?;
        }
        Ok(())
    }
}

impl Default for Driver {
    fn default() -> Self {
        Driver::new(DEFAULT_BASE_PATH, DEFAULT_PROJECTS.iter().map(|p| p.to_string()).collect())
    }
}
