use chub_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_file_sink_writes_structured_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("carehub-file")
        .console(false)
        .level(LevelFilter::INFO)
        .json()
        .path(&log_dir)
        .max_files(2)
        .init()?;
    assert!(logger.writes_files());

    tracing::info!(field = "cep", "keystroke accepted");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let line = contents.lines().find(|line| line.contains("keystroke accepted")).expect("event logged");
    assert!(line.starts_with('{'), "json lines expected, got {line}");
    assert!(line.contains("\"field\":\"cep\""));

    Ok(())
}
