//! Common constants used throughout cicdgen.

/// Directory holding one sub-directory per project
pub const DEFAULT_BASE_PATH: &str = "../configs/";

/// Projects generated when none are given on the command line
pub const DEFAULT_PROJECTS: [&str; 1] = ["devops_cicd"];

/// Configuration printed by the `dump` command when no path is given
pub const DEFAULT_DUMP_PATH: &str = "../configs/devops_cicd/devops_cicd.yaml";

/// Extension of project configuration files
pub const CONFIG_EXTENSION: &str = "yaml";

/// Prefix of the generated Jenkins file name
pub const JENKINS_OUTPUT_PREFIX: &str = "jenkins_";

/// Branch pattern every generated job excludes
pub const BRANCHES_EXCLUDE: &str = "release/*";

/// Substituted for the URL of a repository that cannot be found
pub const MISSING_URL: &str = "ERROR! - URL not found";

/// Substituted for the credential of a repository that cannot be found
pub const MISSING_CREDENTIAL: &str = "ERROR!!";
