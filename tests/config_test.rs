use cicdgen::config::{JenkinsJob, ProjectConfig, ResolvedRepository};
use cicdgen::error::Error;

fn config(yaml: &str) -> ProjectConfig {
    ProjectConfig::from_tree(&serde_yaml::from_str(yaml).unwrap()).unwrap()
}

fn job(repository: &str) -> JenkinsJob {
    JenkinsJob {
        name: "job".to_string(),
        repository: repository.to_string(),
        branches_include: "main".to_string(),
        trigger_period: "1 0 * * *".to_string(),
    }
}

const REPOS: &str = r#"
project:
  name: demo
  description: Demo
  owner: ignored
repositories:
  - name: r1
    url: https://x/r1.git
    credential: cred1
  - name: r2
    url: https://x/r2.git
    credential: cred2
  - name: r1
    url: https://x/duplicate.git
    credential: dup
jenkins_jobs: []
"#;

#[test]
fn test_from_tree() {
    let cfg = config(REPOS);

    assert_eq!(cfg.project.name, "demo");
    assert_eq!(cfg.project.description, "Demo");
    assert_eq!(cfg.repositories.len(), 3);
    assert!(cfg.jenkins_jobs.is_empty());
}

#[test]
fn test_lookup_repository() {
    let cfg = config(REPOS);

    assert_eq!(
        cfg.lookup_repository("r2").and_then(|r| r.url.as_deref()),
        Some("https://x/r2.git")
    );
    assert_eq!(cfg.lookup_repository("r1").and_then(|r| r.credential.as_deref()), Some("cred1"));
    assert!(cfg.lookup_repository("R1").is_none());
    assert!(cfg.lookup_repository("").is_none());
}

#[test]
fn test_resolve() {
    let cfg = config(REPOS);

    assert_eq!(
        ResolvedRepository::resolve(&cfg, &job("r2")).unwrap(),
        ResolvedRepository {
            url: "https://x/r2.git".to_string(),
            credential: "cred2".to_string()
        }
    );
    assert_eq!(
        ResolvedRepository::resolve(&cfg, &job("nope")).unwrap(),
        ResolvedRepository::missing()
    );
}

#[test]
fn test_missing_placeholder() {
    let missing = ResolvedRepository::missing();
    assert_eq!(missing.url, "ERROR! - URL not found");
    assert_eq!(missing.credential, "ERROR!!");
}

const INCOMPLETE: &str = r#"
project: {name: demo, description: Demo}
repositories:
  - {name: r1, url: "https://x/r1.git", credential: cred1}
  - {name: old, url: "https://x/old.git"}
  - {name: bare}
jenkins_jobs: []
"#;

#[test]
fn test_incomplete_repository_is_loaded() {
    let cfg = config(INCOMPLETE);

    assert_eq!(cfg.repositories.len(), 3);
    assert_eq!(
        ResolvedRepository::resolve(&cfg, &job("r1")).unwrap().url,
        "https://x/r1.git"
    );
}

#[test]
fn test_resolving_incomplete_repository() {
    let cfg = config(INCOMPLETE);

    match ResolvedRepository::resolve(&cfg, &job("old")) {
        Err(Error::ConfigError(msg)) => {
            assert!(msg.contains("credential"));
            assert!(msg.contains("old"));
        }
        other => panic!("Expected ConfigError, got {other:?}"),
    }
    match ResolvedRepository::resolve(&cfg, &job("bare")) {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("url")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_repository_without_name() {
    let tree = serde_yaml::from_str(
        "project: {name: demo, description: Demo}\nrepositories:\n  - {url: u, credential: c}\njenkins_jobs: []\n",
    )
    .unwrap();

    assert!(matches!(ProjectConfig::from_tree(&tree), Err(Error::ConfigError(_))));
}

#[test]
fn test_null_tree() {
    assert!(matches!(
        ProjectConfig::from_tree(&serde_yaml::Value::Null),
        Err(Error::ConfigError(_))
    ));
}
