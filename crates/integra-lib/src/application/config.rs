//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> env vars -> CLI args.

use crate::model::Platform;
use crate::networking::ClientConfig;
use crate::primitives::*;
use clap::Parser;
use serde::Deserialize;

/// Default configuration values
pub mod defaults {
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const NET_TIMEOUT: &str = "30";
}

/// Default value functions for configuration fields
mod default_fns {
    use super::*;
    use crate::primitives::{LogFormat, LogOutput};

    pub fn log_level() -> u8 {
        defaults::LOG_LEVEL.parse().unwrap()
    }

    pub fn log_format() -> LogFormat {
        defaults::LOG_FORMAT.parse().unwrap()
    }

    pub fn log_output() -> LogOutput {
        defaults::LOG_OUTPUT.parse().unwrap()
    }

    pub fn net_timeout() -> u64 {
        defaults::NET_TIMEOUT.parse().unwrap()
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Maximum in-flight platform requests (derived from CPU count if unset)
    #[arg(short = 'j', long, env = "INTEGRA_NET_JOBS")]
    #[serde(default)]
    pub net_jobs: Option<u32>,

    /// API timeout in seconds
    #[arg(short, long, env = "INTEGRA_NET_TIMEOUT", default_value = defaults::NET_TIMEOUT)]
    #[serde(default = "default_fns::net_timeout")]
    pub net_timeout: u64,

    /// Modrinth API key
    #[arg(long, env = "INTEGRA_MODRINTH_API_KEY", hide_env_values = true)]
    #[serde(default)]
    pub modrinth_api_key: Option<String>,

    /// CurseForge API key
    #[arg(long, env = "INTEGRA_CURSEFORGE_API_KEY", hide_env_values = true)]
    #[serde(default)]
    pub curseforge_api_key: Option<String>,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "INTEGRA_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json)
    #[arg(long, env = "INTEGRA_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "INTEGRA_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            net_jobs: None,
            net_timeout: default_fns::net_timeout(),
            modrinth_api_key: None,
            curseforge_api_key: None,
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
        }
    }
}

impl AppConfig {
    /// Create LoggerConfig from AppConfig
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
        }
    }

    /// Create ClientConfig from AppConfig
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig {
            max_inflight: self.net_jobs,
            timeout_seconds: self.net_timeout,
        }
    }

    /// API key for a platform, if one is configured
    ///
    /// Modrinth accepts anonymous requests; the key only raises rate
    /// limits. CurseForge refuses requests without one.
    pub fn key_for(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Modrinth => self.modrinth_api_key.as_deref(),
            Platform::CurseForge => self.curseforge_api_key.as_deref(),
            Platform::Spiget => None,
        }
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        // For Option fields, take other if it's Some
        if other.net_jobs.is_some() {
            self.net_jobs = other.net_jobs;
        }
        if other.modrinth_api_key.is_some() {
            self.modrinth_api_key = other.modrinth_api_key;
        }
        if other.curseforge_api_key.is_some() {
            self.curseforge_api_key = other.curseforge_api_key;
        }

        // For primitive fields, take other if it's not the default
        if other.net_timeout != default_fns::net_timeout() {
            self.net_timeout = other.net_timeout;
        }
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }

        // For enums, detect if it's non-default
        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.net_timeout == 0 {
            return Err(ConfigError::ValidationFailed {
                reason: "net_timeout must be at least 1 second".to_string(),
            });
        }
        if self.net_jobs == Some(0) {
            return Err(ConfigError::ValidationFailed {
                reason: "net_jobs must be at least 1 when set".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
