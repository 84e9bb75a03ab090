//! Author lookups
//!
//! The same normalization shape as integrations, reduced to a single
//! record per platform. Spiget never reports a registration date.

use super::{AdapterError, parse_url};
use crate::model::{Author, Platform, RemoteHandle};
use crate::networking::PlatformClient;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct ModrinthUser {
    id: String,
    username: String,
    name: Option<String>,
    avatar_url: Option<String>,
    created: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CurseForgeEnvelope {
    data: CurseForgeUser,
}

#[derive(Debug, Deserialize)]
struct CurseForgeUser {
    id: i64,
    #[serde(rename = "displayName")]
    display_name: String,
    #[serde(rename = "avatarUrl")]
    avatar_url: Option<String>,
    #[serde(rename = "dateCreated")]
    date_created: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SpigetAuthor {
    id: i64,
    name: String,
    icon: Option<SpigetIcon>,
}

#[derive(Debug, Deserialize)]
struct SpigetIcon {
    url: Option<String>,
}

/// Fetch one author record from a platform
pub async fn get_author(
    client: Arc<PlatformClient>,
    platform: Platform,
    identifier: &str,
    key: Option<&str>,
) -> Result<Author, AdapterError> {
    get_author_at(client, platform, identifier, key, platform.base_url()).await
}

/// Like [`get_author`] but against an explicit API root
pub async fn get_author_at(
    client: Arc<PlatformClient>,
    platform: Platform,
    identifier: &str,
    key: Option<&str>,
    base_url: &str,
) -> Result<Author, AdapterError> {
    if platform.key_required() && key.is_none() {
        return Err(AdapterError::MissingKey { platform });
    }

    let remote = RemoteHandle::new(client, platform, base_url, key.map(String::from));

    match platform {
        Platform::Modrinth => {
            let url = remote.endpoint(&format!("/user/{identifier}"));
            let body = remote.client.get_text(&url, remote.auth()).await?;
            let user: ModrinthUser = serde_json::from_str(&body)?;
            Ok(Author {
                id: user.id,
                name: user.name.unwrap_or(user.username),
                avatar: parse_url(user.avatar_url.as_deref()),
                registered: user
                    .created
                    .and_then(|ts| ts.parse::<DateTime<Utc>>().ok()),
                platform,
            })
        }

        Platform::CurseForge => {
            let url = remote.endpoint(&format!("/users/{identifier}"));
            let body = remote.client.get_text(&url, remote.auth()).await?;
            let user: CurseForgeEnvelope = serde_json::from_str(&body)?;
            let user = user.data;
            Ok(Author {
                id: user.id.to_string(),
                name: user.display_name,
                avatar: parse_url(user.avatar_url.as_deref()),
                registered: user
                    .date_created
                    .and_then(|ts| ts.parse::<DateTime<Utc>>().ok()),
                platform,
            })
        }

        Platform::Spiget => {
            let url = remote.endpoint(&format!("/authors/{identifier}"));
            let body = remote.client.get_text(&url, remote.auth()).await?;
            let author: SpigetAuthor = serde_json::from_str(&body)?;
            Ok(Author {
                id: author.id.to_string(),
                name: author.name,
                avatar: author
                    .icon
                    .and_then(|i| i.url)
                    .and_then(|path| parse_url(Some(&format!("https://www.spigotmc.org/{path}")))),
                registered: None,
                platform,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    include!("authority.test.rs");
}
