//! Spiget platform adapter
//!
//! Spiget serves Spigot plugins exclusively, so every integration is a
//! plugin and every file targets Spigot-family loaders. The API reports
//! epoch-millisecond timestamps, no per-file game versions (the resource's
//! tested versions stand in), no file sizes and no changelogs.

use super::{AdapterError, categories, parse_url};
use crate::model::{
    Author, ChangelogSource, DescriptionSource, FileRecord, Integration, IntegrationInfo,
    IntegrationType, Loader, RemoteHandle, Side, Status,
};
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use tracing::debug;

const SITE_URL: &str = "https://www.spigotmc.org/";

#[derive(Debug, Deserialize)]
struct ResourcePayload {
    id: i64,
    name: String,
    file: Option<FileInfoPayload>,
    #[serde(rename = "releaseDate")]
    release_date: i64,
    #[serde(rename = "updateDate")]
    update_date: i64,
    downloads: u64,
    #[serde(default)]
    likes: u64,
    #[serde(rename = "testedVersions", default)]
    tested_versions: Vec<String>,
    category: Option<CategoryPayload>,
    icon: Option<IconPayload>,
    #[serde(rename = "donationLink")]
    donation_link: Option<String>,
    documentation: Option<String>,
    #[serde(rename = "sourceCodeLink")]
    source_code_link: Option<String>,
    #[serde(default)]
    premium: bool,
    contributors: Option<String>,
    author: Option<AuthorRefPayload>,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct FileInfoPayload {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CategoryPayload {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct IconPayload {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AuthorRefPayload {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct VersionPayload {
    id: i64,
    name: String,
    #[serde(default)]
    downloads: u64,
}

#[derive(Debug, Deserialize)]
struct AuthorPayload {
    id: i64,
    name: String,
    icon: Option<IconPayload>,
}

fn epoch_millis(ms: i64) -> Result<DateTime<Utc>, AdapterError> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .ok_or_else(|| AdapterError::Decode {
            reason: format!("timestamp {ms} out of range"),
        })
}

pub(super) async fn fetch(
    remote: &RemoteHandle,
    identifier: &str,
) -> Result<Integration, AdapterError> {
    let resource_url = remote.endpoint(&format!("/resources/{identifier}"));
    let body = remote.client.get_text(&resource_url, remote.auth()).await?;
    let resource: ResourcePayload = serde_json::from_str(&body)?;

    let versions_url = remote.endpoint(&format!("/resources/{identifier}/versions?size=10000"));
    let body = remote.client.get_text(&versions_url, remote.auth()).await?;
    let versions: Vec<VersionPayload> = serde_json::from_str(&body)?;

    let published = epoch_millis(resource.release_date)?;
    let file_path = resource
        .file
        .as_ref()
        .and_then(|f| f.url.as_deref())
        .unwrap_or_default();

    // Download URLs address the site, not the API; the version id goes
    // after the '=' of the resource's file path
    let download_base = format!(
        "{SITE_URL}{}=",
        file_path.split('=').next().unwrap_or_default()
    );

    let seeds = versions
        .into_iter()
        .map(|ver| FileRecord {
            id: ver.id.to_string(),
            file_name: format!("{}.jar", ver.name),
            url: parse_url(Some(&format!("{download_base}{}", ver.id))),
            // Spiget never reports file sizes
            size: 1,
            published,
            downloads: ver.downloads,
            loaders: vec![Loader::Spigot, Loader::Paper],
            game_versions: resource.tested_versions.clone(),
            side: Side::Server,
            changelog: ChangelogSource::Absent,
            dependencies: Vec::new(),
        })
        .collect();

    let slug = file_path
        .split('/')
        .nth(1)
        .and_then(|part| part.split('.').next())
        .map(String::from)
        .unwrap_or_else(|| resource.id.to_string());

    let info = IntegrationInfo {
        remote: remote.clone(),
        id: resource.id.to_string(),
        title: resource.name,
        slug,
        integration_type: IntegrationType::Plugin,
        // Spiget has no review pipeline to report
        status: Status::Unknown,
        team: None,
        categories: resource
            .category
            .and_then(|c| categories::map_spiget(c.id))
            .into_iter()
            .collect(),
        authors: fetch_authors(remote, &resource.author, resource.contributors.as_deref()).await,
        published,
        updated: epoch_millis(resource.update_date)?,
        approved: Some(published),
        downloads: resource.downloads,
        likes: resource.likes,
        icon: resource
            .icon
            .and_then(|i| i.url)
            .and_then(|path| parse_url(Some(&format!("{SITE_URL}{path}")))),
        issues: None,
        wiki: parse_url(resource.documentation.as_deref()),
        source: parse_url(resource.source_code_link.as_deref()),
        donation: parse_url(resource.donation_link.as_deref()),
        screenshots: Vec::new(),
        // Delivered base64-encoded; handed through untouched
        description: DescriptionSource::Inline(resource.description),
        license: None,
        premium: resource.premium,
    };

    Ok(Integration::new(info, seeds))
}

/// The named author resolves through `/authors/{id}` best-effort;
/// contributors are a comma-separated string with no ids behind them
async fn fetch_authors(
    remote: &RemoteHandle,
    author: &Option<AuthorRefPayload>,
    contributors: Option<&str>,
) -> Vec<Author> {
    let mut authors = Vec::new();

    if let Some(author_ref) = author {
        let url = remote.endpoint(&format!("/authors/{}", author_ref.id));
        match remote.client.get_text(&url, remote.auth()).await {
            Ok(body) => match serde_json::from_str::<AuthorPayload>(&body) {
                Ok(payload) => authors.push(Author {
                    id: payload.id.to_string(),
                    name: payload.name,
                    avatar: payload
                        .icon
                        .and_then(|i| i.url)
                        .and_then(|path| parse_url(Some(&format!("{SITE_URL}{path}")))),
                    registered: None,
                    platform: remote.platform,
                }),
                Err(e) => debug!(author = author_ref.id, error = %e, "author payload did not decode"),
            },
            Err(e) => debug!(author = author_ref.id, error = %e, "author lookup failed"),
        }
    }

    if let Some(contributors) = contributors {
        for name in contributors.split(", ").filter(|n| !n.is_empty()) {
            if !authors.iter().any(|a| a.name == name) {
                authors.push(Author {
                    id: String::new(),
                    name: name.to_string(),
                    avatar: None,
                    registered: None,
                    platform: remote.platform,
                });
            }
        }
    }

    authors
}

#[cfg(test)]
mod tests {
    include!("spiget.test.rs");
}
