use graphlog::config::DEFAULT_MAX_COUNT;
use graphlog::{ExportFormat, GraphLogConfig, GraphLogError, SeriesStore};

#[test]
fn defaults_match_documented_values() {
    let c = GraphLogConfig::default();
    assert!(!c.append_log_file);
    assert_eq!(c.format, ExportFormat::Table);
    assert!(c.graph_on);
    assert_eq!(c.max_count, DEFAULT_MAX_COUNT);
    assert_eq!(c.plot.offset, [10.0, 10.0]);
    assert_eq!(c.plot.size, [300.0, 150.0]);
    assert!(c.log_path.ends_with("log.csv"));
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let c = GraphLogConfig::load(dir.path().join("absent.yaml")).unwrap();
    assert_eq!(c, GraphLogConfig::default());
}

#[test]
fn partial_yaml_fills_in_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("graphlog.yaml");
    std::fs::write(&path, "format: column\nmax_count: 0\nappend_log_file: true\n").unwrap();
    let c = GraphLogConfig::load(&path).unwrap();
    assert_eq!(c.format, ExportFormat::Column);
    assert!(c.append_log_file);
    assert_eq!(c.max_count, 1);
    assert!(c.graph_on);
    assert_eq!(SeriesStore::from_config(&c).max_count(), 1);
}

#[test]
fn save_and_load_round_trip_json_and_yaml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut c = GraphLogConfig::default();
    c.max_count = 250;
    c.colors[0] = [1, 2, 3];
    c.log_path = dir.path().join("out.csv");
    for name in ["cfg.json", "cfg.yml"] {
        let path = dir.path().join(name);
        c.save(&path).unwrap();
        assert_eq!(GraphLogConfig::load(&path).unwrap(), c);
    }
}

#[test]
fn malformed_file_is_a_config_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        GraphLogConfig::load(&path),
        Err(GraphLogError::Config(_))
    ));
}
