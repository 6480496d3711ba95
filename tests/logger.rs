use graphlog::{
    channel_log, ExportFormat, ExportOutcome, GraphLogConfig, GraphLogger, DEFAULT_SERIES,
};
use std::path::Path;

fn config_at(path: &Path) -> GraphLogConfig {
    GraphLogConfig {
        log_path: path.to_path_buf(),
        ..GraphLogConfig::default()
    }
}

#[test]
fn add_point_uses_current_frame() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut logger = GraphLogger::new(config_at(&dir.path().join("log.csv")));
    logger.begin_frame();
    assert!(logger.add_point("speed", 1.5));
    logger.begin_frame();
    assert!(logger.add_point("speed", 2.5));
    assert!(logger.add_default(7));

    let speed = logger.store().get("speed").unwrap();
    let ticks: Vec<i64> = speed.samples().map(|(t, _)| t).collect();
    assert_eq!(ticks, vec![1, 2]);
    assert_eq!(logger.store().get(DEFAULT_SERIES).unwrap().len(), 1);
}

#[test]
fn rejected_points_do_not_escape() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut logger = GraphLogger::new(config_at(&dir.path().join("log.csv")));
    assert!(logger.add_point("s", 1.0));
    logger.begin_frame();
    assert!(!logger.add_point("s", "oops"));
    logger.begin_frame();
    assert!(logger.add_point("s", 2.0));
    assert_eq!(logger.store().get("s").unwrap().len(), 2);
    assert!(logger.record("s", "oops", 9).is_err());
}

#[test]
fn drain_applies_sink_commands_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut logger = GraphLogger::new(config_at(&dir.path().join("log.csv")));
    let (sink, rx) = channel_log();

    let worker = sink.clone();
    std::thread::spawn(move || {
        worker.record("remote", 1.0, 10).unwrap();
        worker.record("remote", 2.0, 10).unwrap();
    })
    .join()
    .unwrap();
    logger.set_frame(4);
    sink.add_point("framed", "hi").unwrap();
    sink.add_default(3.0).unwrap();
    sink.add_point("framed", 1.0).unwrap();

    assert_eq!(logger.drain(&rx), 4);
    let remote = logger.store().get("remote").unwrap();
    assert_eq!(remote.len(), 1);
    assert_eq!(remote.max(), Some(2.0));
    let framed: Vec<i64> = logger
        .store()
        .get("framed")
        .unwrap()
        .samples()
        .map(|(t, _)| t)
        .collect();
    assert_eq!(framed, vec![4]);
    let names: Vec<&str> = logger.store().names().collect();
    assert_eq!(names, vec!["remote", "framed", DEFAULT_SERIES]);
}

#[test]
fn shutdown_writes_configured_format() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("log.csv");
    let mut config = config_at(&path);
    config.format = ExportFormat::Column;
    let mut logger = GraphLogger::new(config);
    logger.record("A", 10.0, 1).unwrap();
    logger.record("A", 20.0, 2).unwrap();
    logger.record("B", "x", 2).unwrap();

    let outcome = logger.shutdown().unwrap();
    assert!(matches!(outcome, ExportOutcome::Written { .. }));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Frame,A\n1,10\n2,20\n\nFrame,B\n2,x\n\n"
    );
}

#[test]
fn drop_flushes_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("log.csv");
    let mut config = config_at(&path);
    config.append_log_file = true;
    {
        let mut logger = GraphLogger::new(config);
        logger.record("a", 1.0, 1).unwrap();
    }
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Frame,a\n1,1\n\n");
}

#[test]
fn lifecycle_hooks_flush_on_pause_and_focus_loss() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("log.csv");
    let mut logger = GraphLogger::new(config_at(&path));
    logger.record("a", 1.0, 1).unwrap();

    logger.on_pause(false);
    logger.on_focus_changed(true);
    assert!(!path.exists());

    logger.on_pause(true);
    assert!(path.exists());
    std::fs::remove_file(&path).unwrap();

    logger.on_focus_changed(false);
    assert!(path.exists());
    logger.shutdown().unwrap();
}

#[test]
fn failed_save_is_reported_not_panicked() {
    let dir = tempfile::tempdir().expect("tempdir");
    // the temp directory itself is not a writable file
    let mut logger = GraphLogger::new(config_at(dir.path()));
    logger.record("a", 1.0, 1).unwrap();
    assert!(logger.save_log().is_err());
    logger.on_pause(true);
    assert!(logger.shutdown().is_err());
}

#[test]
fn empty_logger_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("log.csv");
    let logger = GraphLogger::new(config_at(&path));
    assert_eq!(logger.shutdown().unwrap(), ExportOutcome::Skipped);
    assert!(!path.exists());
}
