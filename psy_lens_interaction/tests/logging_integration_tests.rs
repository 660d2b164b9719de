//! Integration tests for the Engine logging facade
//!
//! Run with: cargo test --test logging_integration_tests

use psy_lens_interaction::psylens::Engine;
use psy_lens_interaction::psylens::log::{DefaultLogger, Logger, LogEntry, LogSeverity};
use psy_lens_interaction::psylens::PsyLensError;
use psy_lens_interaction::psylens::detection::{DetectionFrame, FrameBasis, InteractionConfig};
use psy_lens_interaction::glam::Vec3;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    Engine::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].message, "Test info message");
        assert_eq!(captured[1].severity, LogSeverity::Warn);
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_invalid_config_is_logged_as_error() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let result = InteractionConfig::default().with_depth(3.0, 1.0).validate();
    assert!(result.is_err());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Error);
        assert_eq!(captured[0].source, "psylens::InteractionConfig");
        assert!(captured[0].message.contains("must be greater than near"));
        assert!(captured[0].file.unwrap().ends_with("config.rs"));
        assert!(captured[0].line.is_some());
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_invalid_frame_is_logged_once_at_frame_site() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let config = InteractionConfig::default().with_depth(-1.0, 2.0);
    let result = DetectionFrame::new(Vec3::ZERO, FrameBasis::IDENTITY, &config);
    assert!(matches!(result, Err(PsyLensError::InvalidFrame(_))));

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Error);
        assert_eq!(captured[0].source, "psylens::DetectionFrame");
        assert!(captured[0].message.starts_with("Invalid detection frame"));
        assert!(captured[0].file.unwrap().ends_with("detection_frame.rs"));
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_filtered_default_logger_does_not_panic() {
    Engine::set_logger(DefaultLogger::with_min_severity(LogSeverity::Error));
    Engine::log(LogSeverity::Debug, "test::module", "dropped".to_string());
    Engine::log(LogSeverity::Error, "test::module", "printed".to_string());
    Engine::reset_logger();
}
