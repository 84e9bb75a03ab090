use super::file::{FileRecord, IntegrationFile};
use super::{Author, Category, IntegrationType, Platform, Status};
use crate::api::AdapterError;
use crate::networking::PlatformClient;
use chrono::{DateTime, Utc};
use std::ops::Deref;
use std::sync::{Arc, OnceLock};
use url::Url;

/// Connection back to the platform an integration was fetched from
///
/// Carried by every [`IntegrationInfo`] so lazy accessors (out-of-band
/// descriptions, changelogs, dependency fetches) reuse the same client,
/// base URL and key the original fetch used.
#[derive(Clone, Debug)]
pub struct RemoteHandle {
    pub(crate) client: Arc<PlatformClient>,
    pub(crate) platform: Platform,
    pub(crate) base_url: String,
    pub(crate) key: Option<String>,
}

impl RemoteHandle {
    pub(crate) fn new(
        client: Arc<PlatformClient>,
        platform: Platform,
        base_url: impl Into<String>,
        key: Option<String>,
    ) -> Self {
        Self {
            client,
            platform,
            base_url: base_url.into(),
            key,
        }
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn auth(&self) -> Option<(&'static str, &str)> {
        self.key
            .as_deref()
            .map(|k| (self.platform.auth_header(), k))
    }

    /// Fetch an endpoint whose body is a `{"data": "..."}` envelope
    pub(crate) async fn fetch_data_string(&self, path: &str) -> Result<String, AdapterError> {
        let url = self.endpoint(path);
        let map = self.client.fetch_object(&url, self.auth()).await?;
        match map.get("data").and_then(|v| v.as_str()) {
            Some(s) => Ok(s.to_string()),
            None => Err(AdapterError::Decode {
                reason: format!("missing 'data' string in response from {url}"),
            }),
        }
    }
}

/// Where an integration's long-form description lives
#[derive(Debug, Clone)]
pub enum DescriptionSource {
    /// Delivered with the project payload
    Inline(String),
    /// Served from a separate endpoint, fetched on demand
    Endpoint(String),
}

/// Immutable project metadata shared by an integration and all its files
///
/// Does not own the file collection; files hold a strong reference back to
/// this instead, so a file resolved as a dependency stays valid after the
/// [`Integration`] that produced it is gone.
#[derive(Debug)]
pub struct IntegrationInfo {
    pub(crate) remote: RemoteHandle,
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) slug: String,
    pub(crate) integration_type: IntegrationType,
    pub(crate) status: Status,
    pub(crate) team: Option<String>,
    pub(crate) categories: Vec<Category>,
    pub(crate) authors: Vec<Author>,
    pub(crate) published: DateTime<Utc>,
    pub(crate) updated: DateTime<Utc>,
    pub(crate) approved: Option<DateTime<Utc>>,
    pub(crate) downloads: u64,
    pub(crate) likes: u64,
    pub(crate) icon: Option<Url>,
    pub(crate) issues: Option<Url>,
    pub(crate) wiki: Option<Url>,
    pub(crate) source: Option<Url>,
    pub(crate) donation: Option<Url>,
    pub(crate) screenshots: Vec<Url>,
    pub(crate) description: DescriptionSource,
    pub(crate) license: Option<String>,
    pub(crate) premium: bool,
}

impl IntegrationInfo {
    pub fn platform(&self) -> Platform {
        self.remote.platform
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn integration_type(&self) -> IntegrationType {
        self.integration_type
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Owning team id; only Modrinth has a team concept
    pub fn team(&self) -> Option<&str> {
        self.team.as_deref()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn published(&self) -> DateTime<Utc> {
        self.published
    }

    pub fn updated(&self) -> DateTime<Utc> {
        self.updated
    }

    pub fn approved(&self) -> Option<DateTime<Utc>> {
        self.approved
    }

    pub fn downloads(&self) -> u64 {
        self.downloads
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }

    pub fn icon(&self) -> Option<&Url> {
        self.icon.as_ref()
    }

    pub fn issues(&self) -> Option<&Url> {
        self.issues.as_ref()
    }

    pub fn wiki(&self) -> Option<&Url> {
        self.wiki.as_ref()
    }

    pub fn source(&self) -> Option<&Url> {
        self.source.as_ref()
    }

    pub fn donation(&self) -> Option<&Url> {
        self.donation.as_ref()
    }

    pub fn screenshots(&self) -> &[Url] {
        &self.screenshots
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn premium(&self) -> bool {
        self.premium
    }

    /// The title with bracketed decorations and symbols stripped
    ///
    /// A human-readable key, not an identifier.
    pub fn clean_title(&self) -> String {
        let mut out = String::with_capacity(self.title.len());
        let mut depth = 0usize;
        for c in self.title.chars() {
            match c {
                '(' | '[' | '{' | '<' => depth += 1,
                ')' | ']' | '}' | '>' => depth = depth.saturating_sub(1),
                _ if depth == 0 => {
                    if c.is_alphanumeric() || c.is_whitespace() || c.is_ascii_punctuation() {
                        out.push(c);
                    }
                }
                _ => {}
            }
        }
        let mut collapsed = String::with_capacity(out.len());
        let mut last_space = false;
        for c in out.trim().chars() {
            if c.is_whitespace() {
                if !last_space {
                    collapsed.push(' ');
                }
                last_space = true;
            } else {
                collapsed.push(c);
                last_space = false;
            }
        }
        collapsed
    }

    pub fn implementation_type(&self) -> super::ImplementationType {
        self.integration_type.implementation_type()
    }

    /// The long-form description, fetching it when the platform serves it
    /// from a separate endpoint
    pub async fn full_description(&self) -> Result<String, AdapterError> {
        match &self.description {
            DescriptionSource::Inline(body) => Ok(body.clone()),
            DescriptionSource::Endpoint(path) => self.remote.fetch_data_string(path).await,
        }
    }
}

/// One hosted project together with its downloadable files
///
/// Files are materialized lazily on first access and cached for the
/// lifetime of this value. Dereferences to [`IntegrationInfo`] for all
/// metadata accessors.
#[derive(Debug)]
pub struct Integration {
    info: Arc<IntegrationInfo>,
    seeds: Vec<FileRecord>,
    files: OnceLock<Vec<Arc<IntegrationFile>>>,
}

impl Integration {
    pub(crate) fn new(info: IntegrationInfo, seeds: Vec<FileRecord>) -> Self {
        Self {
            info: Arc::new(info),
            seeds,
            files: OnceLock::new(),
        }
    }

    /// All published files, newest-first in platform order
    pub fn files(&self) -> &[Arc<IntegrationFile>] {
        self.files.get_or_init(|| {
            self.seeds
                .iter()
                .map(|record| Arc::new(IntegrationFile::new(record.clone(), self.info.clone())))
                .collect()
        })
    }

    pub fn info(&self) -> &Arc<IntegrationInfo> {
        &self.info
    }
}

impl Deref for Integration {
    type Target = IntegrationInfo;

    fn deref(&self) -> &Self::Target {
        &self.info
    }
}
