//! Platform adapters and dependency resolution
//!
//! One adapter per hosting platform turns raw API payloads into the unified
//! model. Construction failures are fatal to the caller; enrichment lookups
//! (authors, a single screenshot URL, one dependency) degrade to
//! empty/absent instead of failing the whole entity.

use crate::model::{Integration, Platform, RemoteHandle};
use crate::networking::{PlatformClient, TransportError};
use std::sync::Arc;
use thiserror::Error;
use url::Url;

pub mod authority;
pub mod categories;
mod curseforge;
mod modrinth;
pub mod resolver;
mod spiget;

pub use authority::{get_author, get_author_at};
pub use resolver::{ResolutionLimits, TransitiveResolution, resolve_transitive};

/// Adapter-level failures surfaced to the caller
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("{platform} requires an API key and none was supplied")]
    MissingKey { platform: Platform },

    #[error("Transport failure: {source}")]
    Transport { source: TransportError },

    #[error("Failed to decode platform response: {reason}")]
    Decode { reason: String },
}

impl From<TransportError> for AdapterError {
    fn from(e: TransportError) -> Self {
        match e {
            // A well-formed HTTP exchange with the wrong body shape is a
            // decode problem, not a transport one
            TransportError::UnexpectedPayload { endpoint, expected } => AdapterError::Decode {
                reason: format!("response from {endpoint} is not a JSON {expected}"),
            },
            other => AdapterError::Transport { source: other },
        }
    }
}

impl From<serde_json::Error> for AdapterError {
    fn from(e: serde_json::Error) -> Self {
        AdapterError::Decode {
            reason: e.to_string(),
        }
    }
}

impl From<chrono::ParseError> for AdapterError {
    fn from(e: chrono::ParseError) -> Self {
        AdapterError::Decode {
            reason: format!("invalid timestamp: {e}"),
        }
    }
}

/// Fetch one integration from its platform
///
/// Performs the full metadata and file-list fetch up front; files and
/// dependencies materialize lazily from the fetched state.
pub async fn get_integration(
    client: Arc<PlatformClient>,
    platform: Platform,
    identifier: &str,
    key: Option<&str>,
) -> Result<Integration, AdapterError> {
    get_integration_at(client, platform, identifier, key, platform.base_url()).await
}

/// Like [`get_integration`] but against an explicit API root
pub async fn get_integration_at(
    client: Arc<PlatformClient>,
    platform: Platform,
    identifier: &str,
    key: Option<&str>,
    base_url: &str,
) -> Result<Integration, AdapterError> {
    if platform.key_required() && key.is_none() {
        return Err(AdapterError::MissingKey { platform });
    }

    let remote = RemoteHandle::new(client, platform, base_url, key.map(String::from));
    fetch_for_dependency(&remote, identifier).await
}

/// Re-fetch a project through an existing remote handle
///
/// Dependency resolution goes through here so lazy lookups reuse the
/// client, base URL and key of the fetch that declared the dependency.
pub(crate) async fn fetch_for_dependency(
    remote: &RemoteHandle,
    identifier: &str,
) -> Result<Integration, AdapterError> {
    match remote.platform {
        Platform::Modrinth => modrinth::fetch(remote, identifier).await,
        Platform::CurseForge => curseforge::fetch(remote, identifier).await,
        Platform::Spiget => spiget::fetch(remote, identifier).await,
    }
}

/// Parse a URL-typed field, treating empty and malformed values as absent
pub(crate) fn parse_url(value: Option<&str>) -> Option<Url> {
    value
        .filter(|s| !s.is_empty())
        .and_then(|s| Url::parse(s).ok())
}
