use crate::model::Platform;
use crate::primitives::ConfigError;
use clap::{Parser, Subcommand};

use super::config::AppConfig;

/// integra CLI - Minecraft integration metadata
#[derive(Debug, Clone, Parser)]
#[command(name = "integra")]
#[command(about = "Unified metadata and dependency resolution for Minecraft integrations")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// integra commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from all sources
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load config: defaults -> .env -> env vars -> CLI
    pub fn load() -> Result<Self, ConfigError> {
        use dotenvy::from_filename;

        // 1. Start with defaults
        let mut config = AppConfig::default();

        // 2. Load .env file (if it exists, don't error if missing)
        let env_files = [".env.local", ".env"];
        for env_file in &env_files {
            if let Err(e) = from_filename(env_file) {
                // Only fail if the file exists but can't be read
                if !e.to_string().contains("not found") && !e.to_string().contains("No such file") {
                    return Err(ConfigError::EnvFileError {
                        file: env_file.to_string(),
                        source: e,
                    });
                }
            }
        }

        // 3. Environment variables (includes anything the .env files set)
        let env_config: AppConfig = envy::prefixed("INTEGRA_").from_env()?;
        config = config.merge_with(env_config);

        // 4. Override with CLI arguments (highest precedence)
        let cli = Cli::parse();
        config = config.merge_with(cli.config);

        // 5. Validate the merged result
        config.validate()?;

        Ok(Self {
            app_config: config,
            command: cli.command,
        })
    }
}

/// Available integra commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Show project metadata
    Info {
        /// Hosting platform
        #[arg(value_enum)]
        platform: Platform,

        /// Project id or slug
        identifier: String,

        /// Also fetch the long-form description body
        #[arg(short, long)]
        description: bool,
    },

    /// List a project's files and their compatibility targets
    Files {
        /// Hosting platform
        #[arg(value_enum)]
        platform: Platform,

        /// Project id or slug
        identifier: String,

        /// Show inferred loader/version pairs instead of declared metadata
        #[arg(short, long)]
        inferred: bool,
    },

    /// Resolve the required dependencies of a file
    Deps {
        /// Hosting platform
        #[arg(value_enum)]
        platform: Platform,

        /// Project id or slug
        identifier: String,

        /// File id to resolve (first listed file if omitted)
        #[arg(short, long)]
        file: Option<String>,

        /// Follow dependency chains transitively
        #[arg(long)]
        deep: bool,

        /// Maximum dependency hops when --deep is set
        #[arg(long, default_value_t = 8)]
        max_depth: usize,
    },

    /// Look up an author profile
    Author {
        /// Hosting platform
        #[arg(value_enum)]
        platform: Platform,

        /// User or author id
        identifier: String,
    },

    /// Show version information
    Version,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            command: None,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
