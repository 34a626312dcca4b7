//! Configuration tests - built-in defaults, partial overrides and derived values
//!
//! WHY: Ensure configuration system works correctly:
//! - Built-in config carries the values the harness depends on (port 8888, 100 MB cap)
//! - Partial YAML only changes the keys it names
//! - The root is pinned to an absolute path once

use std::path::Path;

use crate::cofg::config::{Cofg, CofgAddrs};

#[test]
fn test_default_config_loads() {
    let config = Cofg::default();

    assert_eq!(config.addrs.ip, "127.0.0.1");
    assert_eq!(config.addrs.port, 8888, "harness pages depend on this port");
    assert_eq!(config.server.max_body_size, 100_000_000);
    assert_eq!(config.fs.root_path, ".");
    assert_eq!(config.fs.resolve_marker, "tests");
    assert!(!config.fs.confine_to_root);
    assert!(!config.fs.recursive_delete);
    assert!(!config.middleware.logger.enabling);
    assert_eq!(config.browser.results_page, "tests/webTestResults.html");
}

#[test]
fn test_partial_yaml_overrides_only_named_keys() {
    let yaml_content = r#"
addrs:
  port: 3000
fs:
  root_path: "/srv/site"
  confine_to_root: true
"#;

    let config = Cofg::new_from_str(yaml_content).expect("Should parse test YAML");

    assert_eq!(config.addrs.port, 3000);
    assert_eq!(config.addrs.ip, "127.0.0.1", "unnamed keys keep built-in values");
    assert_eq!(config.fs.root_path, "/srv/site");
    assert!(config.fs.confine_to_root);
    assert_eq!(config.fs.resolve_marker, "tests");
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let result = Cofg::new_from_str("addrs:\n  port: not-a-port\n");
    assert!(result.is_err(), "a non-numeric port must not deserialize");
}

#[test]
fn test_addrs_display() {
    let addrs = CofgAddrs {
        ip: "127.0.0.1".to_string(),
        port: 8080,
    };
    assert_eq!(addrs.to_string(), "127.0.0.1:8080");
}

#[test]
fn test_with_absolute_root() {
    let config = Cofg::default().with_absolute_root().unwrap();
    let root = config.root();

    assert!(root.is_absolute(), "{}", root.display());
    assert_eq!(root, std::env::current_dir().unwrap());
}

#[test]
fn test_with_absolute_root_keeps_absolute_paths() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let mut config = Cofg::default();
    config.fs.root_path = temp_dir.path().join("a/../b").display().to_string();

    let config = config.with_absolute_root().unwrap();
    assert_eq!(config.root(), temp_dir.path().join("b"));
}

#[test]
fn test_results_url() {
    let config = Cofg::default();

    assert_eq!(
        config.results_url(None),
        "http://localhost:8888/tests/webTestResults.html"
    );
    assert_eq!(
        config.results_url(Some("")),
        "http://localhost:8888/tests/webTestResults.html"
    );
    assert_eq!(
        config.results_url(Some("parser")),
        "http://localhost:8888/tests/webTestResults.html?grep=parser"
    );
    assert_eq!(
        config.results_url(Some("a b")),
        "http://localhost:8888/tests/webTestResults.html?grep=a%20b"
    );
}

#[test]
fn test_config_clone() {
    let config1 = Cofg::default();
    let config2 = config1.clone();

    assert_eq!(config1, config2, "Cloned config should equal original");
    assert!(Path::new(&config2.fs.root_path).is_relative());
}
