use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use vapps_logger::{Console, LevelFilter, Logger, LoggerError};

// Each test binary gets one global subscriber, so both cases live in one test.
#[test]
#[serial]
fn file_logging_writes_json_and_second_init_fails() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("vapps-export")
        .console(Console::Off)
        .json(true)
        .path(&log_dir)
        .level(LevelFilter::INFO)
        .init()?;
    assert!(logger.guard().is_some());

    let err = Logger::builder().name("vapps-second").level(LevelFilter::INFO).init().expect_err("second init");
    assert!(matches!(err, LoggerError::Subscriber { .. }));

    tracing::info!(pages = 14, "export finished");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    let line = contents.lines().find(|l| l.contains("export finished")).expect("event logged");
    assert!(line.starts_with('{'), "json lines expected: {line}");
    assert!(line.contains("\"pages\":14"));

    Ok(())
}
