//! Modrinth platform adapter
//!
//! Two fetches build the backing state: `/project/{id}` for metadata and
//! `/project/{id}/version` for the file list. Team members are looked up
//! best-effort through `/team/{id}/members`.

use super::{AdapterError, categories, parse_url};
use crate::model::{
    Author, ChangelogSource, DependencyRef, DescriptionSource, FileRecord, Integration,
    IntegrationInfo, IntegrationType, Loader, RemoteHandle, Side, Status,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ProjectPayload {
    id: String,
    title: String,
    slug: String,
    project_type: String,
    status: String,
    body: String,
    #[serde(default)]
    categories: Vec<String>,
    team: Option<String>,
    published: String,
    updated: String,
    approved: Option<String>,
    downloads: u64,
    followers: u64,
    icon_url: Option<String>,
    issues_url: Option<String>,
    wiki_url: Option<String>,
    source_url: Option<String>,
    #[serde(default)]
    donation_urls: Vec<DonationPayload>,
    #[serde(default)]
    gallery: Vec<GalleryPayload>,
    license: Option<LicensePayload>,
    client_side: Option<String>,
    server_side: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DonationPayload {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GalleryPayload {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LicensePayload {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VersionPayload {
    id: String,
    #[serde(default)]
    changelog: Option<String>,
    date_published: String,
    downloads: u64,
    #[serde(default)]
    loaders: Vec<String>,
    #[serde(default)]
    game_versions: Vec<String>,
    #[serde(default)]
    files: Vec<FilePayload>,
    #[serde(default)]
    dependencies: Vec<DependencyPayload>,
}

#[derive(Debug, Deserialize)]
struct FilePayload {
    url: Option<String>,
    filename: String,
    #[serde(default)]
    primary: bool,
    #[serde(default)]
    size: u64,
}

#[derive(Debug, Deserialize)]
struct DependencyPayload {
    dependency_type: String,
    project_id: Option<String>,
    version_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MemberPayload {
    user: UserPayload,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    id: String,
    username: String,
    name: Option<String>,
    avatar_url: Option<String>,
    created: Option<String>,
}

pub(super) async fn fetch(
    remote: &RemoteHandle,
    identifier: &str,
) -> Result<Integration, AdapterError> {
    let project_url = remote.endpoint(&format!("/project/{identifier}"));
    let body = remote.client.get_text(&project_url, remote.auth()).await?;
    let project: ProjectPayload = serde_json::from_str(&body)?;

    let versions_url = remote.endpoint(&format!("/project/{identifier}/version"));
    let body = remote.client.get_text(&versions_url, remote.auth()).await?;
    let versions: Vec<VersionPayload> = serde_json::from_str(&body)?;

    let integration_type =
        IntegrationType::from_tag(&project.project_type).ok_or_else(|| AdapterError::Decode {
            reason: format!("unknown project type '{}'", project.project_type),
        })?;

    let side = derive_side(
        project.client_side.as_deref(),
        project.server_side.as_deref(),
    );

    let seeds = versions
        .into_iter()
        .filter_map(|ver| build_record(ver, side))
        .collect::<Result<Vec<_>, _>>()?;

    let authors = match &project.team {
        Some(team) => fetch_team(remote, team).await,
        None => Vec::new(),
    };

    let categories = project
        .categories
        .iter()
        .filter_map(|slug| categories::map_modrinth(integration_type, slug))
        .collect();

    let info = IntegrationInfo {
        remote: remote.clone(),
        id: project.id,
        title: project.title,
        slug: project.slug,
        integration_type,
        status: Status::from_tag(&project.status),
        team: project.team,
        categories,
        authors,
        published: project.published.parse::<DateTime<Utc>>()?,
        updated: project.updated.parse::<DateTime<Utc>>()?,
        approved: match project.approved {
            Some(ts) => Some(ts.parse::<DateTime<Utc>>()?),
            None => None,
        },
        downloads: project.downloads,
        likes: project.followers,
        icon: parse_url(project.icon_url.as_deref()),
        issues: parse_url(project.issues_url.as_deref()),
        wiki: parse_url(project.wiki_url.as_deref()),
        source: parse_url(project.source_url.as_deref()),
        donation: project
            .donation_urls
            .first()
            .and_then(|d| parse_url(d.url.as_deref())),
        screenshots: project
            .gallery
            .iter()
            .filter_map(|g| parse_url(g.url.as_deref()))
            .collect(),
        description: DescriptionSource::Inline(project.body),
        license: project.license.and_then(|l| l.id),
        premium: false,
    };

    Ok(Integration::new(info, seeds))
}

/// Build one file record from a version, skipping versions with no files
fn build_record(ver: VersionPayload, side: Side) -> Option<Result<FileRecord, AdapterError>> {
    let file = ver
        .files
        .iter()
        .find(|f| f.primary)
        .or_else(|| ver.files.first())?;

    let published = match ver.date_published.parse::<DateTime<Utc>>() {
        Ok(ts) => ts,
        Err(e) => return Some(Err(e.into())),
    };

    let loaders = ver
        .loaders
        .iter()
        .filter_map(|tag| Loader::from_tag(tag))
        .collect();

    let dependencies = ver
        .dependencies
        .into_iter()
        .filter_map(|dep| {
            Some(DependencyRef {
                project_id: dep.project_id?,
                version_id: dep.version_id,
                required: dep.dependency_type == "required",
            })
        })
        .collect();

    Some(Ok(FileRecord {
        id: ver.id,
        file_name: file.filename.clone(),
        url: parse_url(file.url.as_deref()),
        size: file.size,
        published,
        downloads: ver.downloads,
        loaders,
        game_versions: ver.game_versions,
        side,
        changelog: match ver.changelog {
            Some(text) => ChangelogSource::Inline(text),
            None => ChangelogSource::Absent,
        },
        dependencies,
    }))
}

fn derive_side(client: Option<&str>, server: Option<&str>) -> Side {
    let unsupported = |s: Option<&str>| matches!(s, Some("unsupported") | Some("unknown"));
    if unsupported(client) {
        Side::Server
    } else if unsupported(server) {
        Side::Client
    } else {
        Side::Any
    }
}

/// Best-effort author lookup; an unreachable team yields no authors
async fn fetch_team(remote: &RemoteHandle, team: &str) -> Vec<Author> {
    let url = remote.endpoint(&format!("/team/{team}/members"));
    let body = match remote.client.get_text(&url, remote.auth()).await {
        Ok(body) => body,
        Err(e) => {
            debug!(team, error = %e, "team member lookup failed");
            return Vec::new();
        }
    };

    let members: Vec<MemberPayload> = match serde_json::from_str(&body) {
        Ok(members) => members,
        Err(e) => {
            debug!(team, error = %e, "team member payload did not decode");
            return Vec::new();
        }
    };

    members
        .into_iter()
        .map(|m| Author {
            id: m.user.id,
            name: m.user.name.unwrap_or(m.user.username),
            avatar: parse_url(m.user.avatar_url.as_deref()),
            registered: m
                .user
                .created
                .and_then(|ts| ts.parse::<DateTime<Utc>>().ok()),
            platform: remote.platform,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    include!("modrinth.test.rs");
}
