use super::*;

fn test_config() -> LoggerConfig {
    LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
    }
}

#[test]
fn init_is_idempotent_guarded() {
    // First init may succeed or collide with another test's subscriber;
    // either way a second init must report AlreadyInitialized once the
    // global slot is filled.
    let _ = Logger::init(test_config());

    if Logger::is_initialized() {
        assert!(matches!(
            Logger::init(test_config()),
            Err(LoggerError::AlreadyInitialized)
        ));
        assert!(Logger::global().is_some());
    }
}
