use rosterm::config::LoggingConfig;
use rosterm::constants::MAX_LOG_ENTRIES;
use rosterm::logger::Logger;

#[test]
fn test_config_based_logging_disabled() {
    // Test with logging disabled
    let logger = Logger::from_config(&LoggingConfig::default()).unwrap();
    assert!(!logger.is_enabled());
    assert!(logger.log_file().is_none());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_logs_are_returned_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());
    logger.log("third".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 3);
    assert!(logs[0].ends_with("third"));
    assert!(logs[2].ends_with("first"));
}

#[test]
fn test_clones_share_the_buffer() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("from clone".to_string());
    assert_eq!(logger.get_logs().len(), 1);

    logger.clear();
    assert!(clone.get_logs().is_empty());
}

#[test]
fn test_invalid_level_is_rejected_when_enabled() {
    let config = LoggingConfig {
        enabled: true,
        level: "loud".to_string(),
    };
    assert!(Logger::from_config(&config).is_err());
}

#[test]
fn test_log_file_path_is_under_rosterm_dir() {
    let path = Logger::get_log_file_path().unwrap();
    assert!(path.ends_with("rosterm/rosterm.log"));
}

#[test]
fn test_buffer_drops_oldest_entries_beyond_cap() {
    let logger = Logger::new();
    for i in 0..MAX_LOG_ENTRIES + 5 {
        logger.log(format!("entry {}", i));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), MAX_LOG_ENTRIES);
    assert!(logs[0].ends_with(&format!("entry {}", MAX_LOG_ENTRIES + 4)));
    assert!(logs[MAX_LOG_ENTRIES - 1].ends_with("entry 5"));
}
