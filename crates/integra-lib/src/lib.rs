//! # integra Library
//!
//! Unified metadata model for Minecraft integration platforms.
//!
//! Aggregates project and file metadata from Modrinth, CurseForge and Spiget
//! into one [`model::Integration`] / [`model::IntegrationFile`] graph, infers
//! loader and game-version compatibility where a platform leaves it out, and
//! resolves required dependencies to concrete sibling files.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, errors, and shared coordination
//! - [`logger`] - Structured logging initialization
//! - [`networking`] - Async HTTP client with concurrency management
//! - [`model`] - The unified integration entity graph
//! - [`api`] - Platform adapters, category tables, and dependency resolution
//! - [`application`] - CLI interface and configuration management
//!
//! ## Quick Start
//!
//! ```no_run
//! use integra_lib::model::Platform;
//! use integra_lib::networking::{ClientConfig, PlatformClient};
//! use std::sync::Arc;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let client = Arc::new(PlatformClient::new(ClientConfig::default())?);
//! let integration =
//!     integra_lib::api::get_integration(client, Platform::Modrinth, "sodium", None).await?;
//! println!("{} has {} files", integration.title(), integration.files().len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod logger;
pub mod model;
pub mod networking;
pub mod primitives;

// Re-export commonly used types for convenience
pub use api::{AdapterError, get_integration};
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use logger::Logger;
pub use model::{Integration, IntegrationFile, Loader, Platform};
pub use networking::{ClientConfig, PlatformClient};
pub use primitives::{ConfigError, LogFormat, LogLevel, LogOutput, LoggerError};

// Private imports for the main function
use anyhow::Result;
use application::CliConfig;

pub async fn main() -> Result<()> {
    // Load CLI configuration
    let config = CliConfig::load()?;

    // Execute the command
    execute_command(config).await
}
