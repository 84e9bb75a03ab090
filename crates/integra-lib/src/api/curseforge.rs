//! CurseForge platform adapter
//!
//! Every CurseForge response wraps its payload in a `{"data": ...}`
//! envelope and the API refuses unauthenticated requests, so the adapter
//! always sends the key header. Project type and review status come from
//! numeric code tables; loader tags and game versions share one
//! `sortableGameVersions` array and are told apart by the padded-version
//! marker.

use super::{AdapterError, categories, parse_url};
use crate::model::{
    Author, ChangelogSource, DependencyRef, DescriptionSource, FileRecord, Integration,
    IntegrationInfo, IntegrationType, Loader, RemoteHandle, Side, Status,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ModPayload {
    id: i64,
    name: String,
    slug: String,
    #[serde(rename = "classId")]
    class_id: Option<i64>,
    status: i64,
    #[serde(rename = "downloadCount")]
    download_count: u64,
    #[serde(rename = "thumbsUpCount", default)]
    thumbs_up_count: u64,
    #[serde(rename = "dateCreated")]
    date_created: String,
    #[serde(rename = "dateModified")]
    date_modified: String,
    #[serde(rename = "dateReleased")]
    date_released: Option<String>,
    logo: Option<LogoPayload>,
    links: Option<LinksPayload>,
    #[serde(default)]
    authors: Vec<AuthorPayload>,
    #[serde(default)]
    categories: Vec<CategoryPayload>,
    #[serde(default)]
    screenshots: Vec<ScreenshotPayload>,
}

#[derive(Debug, Deserialize)]
struct LogoPayload {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LinksPayload {
    #[serde(rename = "issuesUrl")]
    issues_url: Option<String>,
    #[serde(rename = "wikiUrl")]
    wiki_url: Option<String>,
    #[serde(rename = "sourceUrl")]
    source_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AuthorPayload {
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CategoryPayload {
    #[serde(rename = "classId")]
    class_id: Option<i64>,
    id: i64,
}

#[derive(Debug, Deserialize)]
struct ScreenshotPayload {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FilePayload {
    id: i64,
    #[serde(rename = "fileName")]
    file_name: String,
    #[serde(rename = "downloadUrl")]
    download_url: Option<String>,
    #[serde(rename = "fileLength", default)]
    file_length: u64,
    #[serde(rename = "fileDate")]
    file_date: String,
    #[serde(rename = "downloadCount", default)]
    download_count: u64,
    #[serde(rename = "sortableGameVersions", default)]
    sortable_game_versions: Vec<SortableGameVersion>,
    #[serde(default)]
    dependencies: Vec<DependencyPayload>,
}

#[derive(Debug, Deserialize)]
struct SortableGameVersion {
    #[serde(rename = "gameVersionName")]
    name: String,
    #[serde(rename = "gameVersionPadded")]
    padded: String,
}

#[derive(Debug, Deserialize)]
struct DependencyPayload {
    #[serde(rename = "modId")]
    mod_id: i64,
    #[serde(rename = "relationType")]
    relation_type: i64,
}

pub(super) async fn fetch(
    remote: &RemoteHandle,
    identifier: &str,
) -> Result<Integration, AdapterError> {
    let mod_url = remote.endpoint(&format!("/mods/{identifier}"));
    let body = remote.client.get_text(&mod_url, remote.auth()).await?;
    let project: Envelope<ModPayload> = serde_json::from_str(&body)?;
    let project = project.data;

    // One page holds every file; pagination past 10,000 is not followed
    let files_url = remote.endpoint(&format!("/mods/{identifier}/files?pageSize=10000"));
    let body = remote.client.get_text(&files_url, remote.auth()).await?;
    let files: Envelope<Vec<FilePayload>> = serde_json::from_str(&body)?;

    let integration_type = IntegrationType::from_class_id(project.class_id.unwrap_or(6));
    let mod_id = project.id.to_string();

    let seeds = files
        .data
        .into_iter()
        .map(|file| build_record(file, &mod_id, integration_type))
        .collect::<Result<Vec<_>, _>>()?;

    let authors = project
        .authors
        .into_iter()
        .map(|a| Author {
            id: a.id.to_string(),
            name: a.name,
            avatar: None,
            registered: None,
            platform: remote.platform,
        })
        .collect();

    let categories = project
        .categories
        .iter()
        .filter_map(|c| categories::map_curseforge(c.class_id?, c.id))
        .collect();

    let links = project.links;

    let info = IntegrationInfo {
        remote: remote.clone(),
        id: mod_id.clone(),
        title: project.name,
        slug: project.slug,
        integration_type,
        status: Status::from_code(project.status),
        team: None,
        categories,
        authors,
        published: project.date_created.parse::<DateTime<Utc>>()?,
        updated: project.date_modified.parse::<DateTime<Utc>>()?,
        approved: match project.date_released {
            Some(ts) => Some(ts.parse::<DateTime<Utc>>()?),
            None => None,
        },
        downloads: project.download_count,
        likes: project.thumbs_up_count,
        icon: project
            .logo
            .and_then(|logo| parse_url(logo.url.as_deref())),
        issues: links
            .as_ref()
            .and_then(|l| parse_url(l.issues_url.as_deref())),
        wiki: links
            .as_ref()
            .and_then(|l| parse_url(l.wiki_url.as_deref())),
        source: links
            .as_ref()
            .and_then(|l| parse_url(l.source_url.as_deref())),
        donation: None,
        screenshots: project
            .screenshots
            .iter()
            .filter_map(|s| parse_url(s.url.as_deref()))
            .collect(),
        description: DescriptionSource::Endpoint(format!("/mods/{mod_id}/description")),
        license: None,
        premium: false,
    };

    Ok(Integration::new(info, seeds))
}

fn build_record(
    file: FilePayload,
    mod_id: &str,
    integration_type: IntegrationType,
) -> Result<FileRecord, AdapterError> {
    let file_id = file.id.to_string();

    let mut loaders: Vec<Loader> = file
        .sortable_game_versions
        .iter()
        .filter(|sgv| sgv.padded == "0")
        .filter_map(|sgv| Loader::from_tag(&sgv.name))
        .collect();

    // Types CurseForge never tags with a loader get a type-level default
    match integration_type {
        IntegrationType::Datapack
        | IntegrationType::Resourcepack
        | IntegrationType::World
        | IntegrationType::Customization
        | IntegrationType::Addon => loaders.push(Loader::Any),
        IntegrationType::Plugin => loaders.push(Loader::Bukkit),
        _ => {}
    }

    // A padded entry whose name round-trips through lowercase is a game
    // version; loader tags carry uppercase letters
    let game_versions = file
        .sortable_game_versions
        .iter()
        .filter(|sgv| sgv.padded != "0" && sgv.name.to_lowercase() == sgv.name)
        .map(|sgv| sgv.name.clone())
        .collect();

    let side = derive_side(&file.sortable_game_versions);

    let dependencies = file
        .dependencies
        .into_iter()
        .map(|dep| DependencyRef {
            project_id: dep.mod_id.to_string(),
            version_id: None,
            required: dep.relation_type == 3,
        })
        .collect();

    Ok(FileRecord {
        id: file_id.clone(),
        file_name: file.file_name,
        url: parse_url(file.download_url.as_deref()),
        size: file.file_length,
        published: file.file_date.parse::<DateTime<Utc>>()?,
        downloads: file.download_count,
        loaders,
        game_versions,
        side,
        changelog: ChangelogSource::Endpoint(format!("/mods/{mod_id}/files/{file_id}/changelog")),
        dependencies,
    })
}

fn derive_side(sortable: &[SortableGameVersion]) -> Side {
    let sides: Vec<Side> = sortable
        .iter()
        .filter_map(|sgv| match sgv.name.to_ascii_lowercase().as_str() {
            "client" => Some(Side::Client),
            "server" => Some(Side::Server),
            _ => None,
        })
        .collect();

    let both = sides.contains(&Side::Client) && sides.contains(&Side::Server);
    if both || sides.is_empty() {
        Side::Any
    } else {
        sides[0]
    }
}

#[cfg(test)]
mod tests {
    include!("curseforge.test.rs");
}
