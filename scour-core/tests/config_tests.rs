use scour_core::{CoreConfig, FaultPolicy};

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = CoreConfig::load(dir.path()).unwrap();
    assert_eq!(cfg.faults.policy, FaultPolicy::Throw);
    assert_eq!(cfg.faults.max_entries, 1024);
    assert!(!cfg.patterns.compile_eagerly);
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("scour.toml"),
        "[faults]\npolicy = \"collect\"\nmax_entries = 8\n\n[patterns]\ncompile_eagerly = true\n",
    )
    .unwrap();
    let cfg = CoreConfig::load(dir.path()).unwrap();
    assert_eq!(cfg.faults.policy, FaultPolicy::Collect);
    assert_eq!(cfg.faults.max_entries, 8);
    assert!(cfg.patterns.compile_eagerly);
}

#[test]
fn partial_sections_keep_their_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("scour.toml"), "[faults]\npolicy = \"collect\"\n").unwrap();
    let cfg = CoreConfig::load(dir.path()).unwrap();
    assert_eq!(cfg.faults.policy, FaultPolicy::Collect);
    assert_eq!(cfg.faults.max_entries, 1024);
}

#[test]
fn malformed_config_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("scour.toml"), "faults = \"not a table\"").unwrap();
    let err = CoreConfig::load(dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("parsing config file"));
}

#[test]
fn eager_compilation_constructs_successfully() {
    let mut cfg = CoreConfig::default();
    cfg.patterns.compile_eagerly = true;
    assert!(scour_core::Sanitizer::new(&cfg).is_ok());
}
