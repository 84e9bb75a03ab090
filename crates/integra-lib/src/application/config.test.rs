use super::*;
use crate::primitives::{LogFormat, LogLevel, LogOutput};

#[test]
fn defaults_are_quiet_text_on_stderr() {
    let config = AppConfig::default();
    assert_eq!(config.net_jobs, None);
    assert_eq!(config.net_timeout, 30);
    assert_eq!(config.log_level, 0);
    assert!(matches!(config.log_format, LogFormat::Text));
    assert!(matches!(config.log_output, LogOutput::Stderr));
    assert!(config.modrinth_api_key.is_none());
    assert!(config.curseforge_api_key.is_none());
}

#[test]
fn merge_takes_explicit_values_from_other() {
    let base = AppConfig::default();
    let other = AppConfig {
        net_jobs: Some(4),
        net_timeout: 60,
        curseforge_api_key: Some("cf-key".to_string()),
        log_level: 3,
        log_format: LogFormat::Json,
        ..AppConfig::default()
    };

    let merged = base.merge_with(other);
    assert_eq!(merged.net_jobs, Some(4));
    assert_eq!(merged.net_timeout, 60);
    assert_eq!(merged.curseforge_api_key.as_deref(), Some("cf-key"));
    assert_eq!(merged.log_level, 3);
    assert!(matches!(merged.log_format, LogFormat::Json));
}

#[test]
fn merge_keeps_base_when_other_is_default() {
    let base = AppConfig {
        net_jobs: Some(2),
        modrinth_api_key: Some("mr-key".to_string()),
        log_level: 2,
        ..AppConfig::default()
    };

    let merged = base.merge_with(AppConfig::default());
    assert_eq!(merged.net_jobs, Some(2));
    assert_eq!(merged.modrinth_api_key.as_deref(), Some("mr-key"));
    assert_eq!(merged.log_level, 2);
}

#[test]
fn keys_route_by_platform() {
    let config = AppConfig {
        modrinth_api_key: Some("mr".to_string()),
        curseforge_api_key: Some("cf".to_string()),
        ..AppConfig::default()
    };

    assert_eq!(config.key_for(Platform::Modrinth), Some("mr"));
    assert_eq!(config.key_for(Platform::CurseForge), Some("cf"));
    // Spiget has no key concept
    assert_eq!(config.key_for(Platform::Spiget), None);
}

#[test]
fn validate_rejects_zero_timeout_and_zero_jobs() {
    let config = AppConfig {
        net_timeout: 0,
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));

    let config = AppConfig {
        net_jobs: Some(0),
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));

    assert!(AppConfig::default().validate().is_ok());
}

#[test]
fn client_and_logger_configs_carry_the_tuning_fields() {
    let config = AppConfig {
        net_jobs: Some(6),
        net_timeout: 45,
        log_level: 4,
        log_format: LogFormat::Json,
        log_output: LogOutput::Stdout,
        ..AppConfig::default()
    };

    let client = config.to_client_config();
    assert_eq!(client.max_inflight, Some(6));
    assert_eq!(client.timeout_seconds, 45);

    let logger = config.to_logger_config();
    assert_eq!(logger.level, LogLevel::Trace);
    assert!(matches!(logger.format, LogFormat::Json));
    assert!(matches!(logger.output, LogOutput::Stdout));
}
