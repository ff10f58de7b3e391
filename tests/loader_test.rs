use cicdgen::error::Error;
use cicdgen::loader::{parse, ConfigLoader, YamlFileLoader};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_keeps_tree_untyped() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("demo.yaml");
    fs::write(&path, "project:\n  name: demo\n  count: 3\nrepositories: []\n").unwrap();

    let tree = parse(&path).unwrap();

    assert_eq!(tree["project"]["name"].as_str(), Some("demo"));
    assert_eq!(tree["project"]["count"].as_u64(), Some(3));
    assert!(tree["repositories"].as_sequence().unwrap().is_empty());
}

#[test]
fn test_loader_trait() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("demo.yaml");
    fs::write(&path, "- a\n- b\n").unwrap();

    let loader = YamlFileLoader::new(&path);
    let tree = loader.load().unwrap();

    assert_eq!(tree.as_sequence().map(|s| s.len()), Some(2));
}

#[test]
fn test_malformed_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.yaml");
    fs::write(&path, "project: {name: demo\n  description: [\n").unwrap();

    match parse(&path) {
        Err(Error::YamlError(_)) => (),
        other => panic!("Expected YamlError, got {other:?}"),
    }
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    match parse(temp_dir.path().join("absent.yaml")) {
        Err(Error::IoError(_)) => (),
        other => panic!("Expected IoError, got {other:?}"),
    }
}

#[test]
fn test_merge_keys_are_applied() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("demo.yaml");
    fs::write(
        &path,
        "base: &base\n  branches_include: main\n  trigger_period: daily\njob:\n  <<: *base\n  name: job1\n  trigger_period: hourly\n",
    )
    .unwrap();

    let tree = parse(&path).unwrap();
    let job = &tree["job"];

    assert_eq!(job["name"].as_str(), Some("job1"));
    assert_eq!(job["branches_include"].as_str(), Some("main"));
    assert_eq!(job["trigger_period"].as_str(), Some("hourly"));
    assert!(job.get("<<").is_none());
}
