use hyperfleet_config::load_core_config;
use hyperfleet_domain::Kind;
use std::io::Write;
use std::path::Path;

#[test]
fn load_valid_fixture() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let cfg = load_core_config(&dir.join("core.yml")).expect("should load without error");

    assert_eq!(cfg.required_adapters_for(Kind::Cluster), &["validation", "dns"]);
    assert_eq!(cfg.required_adapters_for(Kind::NodePool), &["validation"]);
    assert_eq!(
        cfg.adapter_condition_suffix_override.get("gcp-provisioner").map(String::as_str),
        Some("Ready")
    );
}

#[test]
fn empty_required_adapters_is_valid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("core.yml");
    std::fs::write(&path, "required_cluster_adapters: []\n").unwrap();

    let cfg = load_core_config(&path).unwrap();
    assert!(cfg.required_adapters_for(Kind::Cluster).is_empty());
    assert!(cfg.required_adapters_for(Kind::NodePool).is_empty());
}

#[test]
fn blank_adapter_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("core.yml");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "required_cluster_adapters: [\"\"]").unwrap();

    assert!(load_core_config(&path).is_err());
}

#[test]
fn missing_file_returns_error() {
    let path = Path::new("/nonexistent/path/does/not/exist/core.yml");
    assert!(load_core_config(path).is_err());
}
