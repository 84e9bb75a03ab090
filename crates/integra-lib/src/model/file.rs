use super::integration::{IntegrationInfo, RemoteHandle};
use super::{GameVersion, IntegrationType, Loader, Side};
use crate::api::AdapterError;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;
use url::Url;

/// Where a file's changelog lives
#[derive(Debug, Clone)]
pub enum ChangelogSource {
    /// Delivered with the file payload
    Inline(String),
    /// Served from a separate endpoint, fetched on demand
    Endpoint(String),
    /// The platform has no changelog concept
    Absent,
}

/// A required or optional dependency declared by the platform
#[derive(Debug, Clone)]
pub struct DependencyRef {
    /// Target project on the same platform
    pub project_id: String,
    /// Exact target file when the platform pins one
    pub version_id: Option<String>,
    pub required: bool,
}

/// Plain normalized file data an adapter hands to the model
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub id: String,
    pub file_name: String,
    pub url: Option<Url>,
    pub size: u64,
    pub published: DateTime<Utc>,
    pub downloads: u64,
    pub loaders: Vec<Loader>,
    pub game_versions: Vec<String>,
    pub side: Side,
    pub changelog: ChangelogSource,
    pub dependencies: Vec<DependencyRef>,
}

/// One downloadable release of an integration
///
/// Holds a strong reference to its parent's [`IntegrationInfo`], so it
/// outlives the `Integration` collection that produced it. Dependencies
/// resolve lazily, exactly once per instance.
#[derive(Debug)]
pub struct IntegrationFile {
    id: String,
    file_name: String,
    url: Option<Url>,
    size: u64,
    published: DateTime<Utc>,
    downloads: u64,
    declared_loaders: Vec<Loader>,
    game_versions: Vec<String>,
    side: Side,
    changelog: ChangelogSource,
    dependencies: Vec<DependencyRef>,
    parent: Arc<IntegrationInfo>,
    resolved: OnceCell<Vec<Arc<IntegrationFile>>>,
}

impl IntegrationFile {
    pub(crate) fn new(record: FileRecord, parent: Arc<IntegrationInfo>) -> Self {
        let mut declared_loaders = Vec::with_capacity(record.loaders.len());
        for loader in record.loaders {
            if !declared_loaders.contains(&loader) {
                declared_loaders.push(loader);
            }
        }
        if declared_loaders.is_empty() {
            declared_loaders.push(Loader::Any);
        }

        let mut game_versions = Vec::with_capacity(record.game_versions.len());
        for version in record.game_versions {
            if !game_versions.contains(&version) {
                game_versions.push(version);
            }
        }

        Self {
            id: record.id,
            file_name: record.file_name,
            url: record.url,
            size: record.size,
            published: record.published,
            downloads: record.downloads,
            declared_loaders,
            game_versions,
            side: record.side,
            changelog: record.changelog,
            dependencies: record.dependencies,
            parent,
            resolved: OnceCell::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn published(&self) -> DateTime<Utc> {
        self.published
    }

    pub fn downloads(&self) -> u64 {
        self.downloads
    }

    /// Loader tags as the platform declared them, normalized and never empty
    pub fn declared_loaders(&self) -> &[Loader] {
        &self.declared_loaders
    }

    /// Game version strings as the platform declared them, deduplicated
    pub fn game_versions(&self) -> &[String] {
        &self.game_versions
    }

    /// Plugins only ever run server-side, whatever the platform claims
    pub fn side(&self) -> Side {
        if self.parent.integration_type() == IntegrationType::Plugin {
            Side::Server
        } else {
            self.side
        }
    }

    /// The integration this file belongs to
    pub fn parent(&self) -> &IntegrationInfo {
        &self.parent
    }

    /// The file's changelog, fetching it when the platform serves it from a
    /// separate endpoint
    pub async fn changelog(&self) -> Result<String, AdapterError> {
        match &self.changelog {
            ChangelogSource::Inline(body) => Ok(body.clone()),
            ChangelogSource::Endpoint(path) => self.parent.remote.fetch_data_string(path).await,
            ChangelogSource::Absent => Ok(String::new()),
        }
    }

    /// Loaders this file can target, inferred from its publication date
    ///
    /// Keeps every loader in the parent type's family that already existed
    /// when the file was published. Never empty: when no named loader
    /// predates the file, `Any` is the floor.
    pub fn possible_loaders(&self) -> Vec<Loader> {
        let mut available: Vec<Loader> = self
            .parent
            .integration_type()
            .loaders()
            .iter()
            .copied()
            .filter(|loader| loader.created() <= self.published)
            .collect();

        if available.is_empty() {
            available.push(Loader::Any);
        }

        available
    }

    /// Every (loader, game version) pair this file is inferred to support
    ///
    /// When the platform gave no loader signal (declared set is exactly
    /// `[Any]`), the date-inferred loaders are folded in; an explicit
    /// declaration is taken verbatim. Deliberately a superset: sparse
    /// platform data overclaims compatibility rather than dropping
    /// legitimate combinations.
    pub fn possible_versions(&self) -> Vec<GameVersion> {
        let mut loaders = self.declared_loaders.clone();
        if loaders == [Loader::Any] {
            for loader in self.possible_loaders() {
                if !loaders.contains(&loader) {
                    loaders.push(loader);
                }
            }
        }

        let mut pairs = Vec::with_capacity(loaders.len() * self.game_versions.len());
        for loader in &loaders {
            for version in &self.game_versions {
                pairs.push(GameVersion::new(*loader, version.clone()));
            }
        }
        pairs
    }

    /// Concrete files satisfying this file's required dependencies
    ///
    /// Resolved once per instance; concurrent callers share the same
    /// in-flight resolution and every later call returns the cached
    /// collection. A dependency that cannot be fetched or matched is
    /// omitted without failing the rest.
    pub async fn dependencies(&self) -> &[Arc<IntegrationFile>] {
        self.resolved.get_or_init(|| self.resolve_required()).await
    }

    async fn resolve_required(&self) -> Vec<Arc<IntegrationFile>> {
        let own_versions: HashSet<GameVersion> = self.possible_versions().into_iter().collect();

        let mut tasks = Vec::new();
        for dep in self.dependencies.iter().filter(|d| d.required) {
            let remote = self.parent.remote.clone();
            let dep = dep.clone();
            let own_versions = own_versions.clone();
            let project_id = dep.project_id.clone();
            let task =
                tokio::spawn(async move { resolve_one(remote, dep, &own_versions).await });
            tasks.push((project_id, task));
        }

        // Awaited in declared order so the result is deterministic
        let mut resolved = Vec::new();
        for (project_id, task) in tasks {
            match task.await {
                Ok(Some(file)) => resolved.push(file),
                Ok(None) => {}
                Err(e) => {
                    debug!(project_id, error = %e, "dependency resolution task failed");
                }
            }
        }
        resolved
    }
}

async fn resolve_one(
    remote: RemoteHandle,
    dep: DependencyRef,
    own_versions: &HashSet<GameVersion>,
) -> Option<Arc<IntegrationFile>> {
    let integration = match crate::api::fetch_for_dependency(&remote, &dep.project_id).await {
        Ok(integration) => integration,
        Err(e) => {
            debug!(project_id = %dep.project_id, error = %e, "skipping unresolvable dependency");
            return None;
        }
    };

    let files = integration.files();
    match &dep.version_id {
        Some(version_id) => files.iter().find(|f| f.id() == version_id.as_str()).cloned(),
        None => files
            .iter()
            .find(|f| {
                f.possible_versions()
                    .iter()
                    .any(|v| own_versions.contains(v))
            })
            .cloned(),
    }
}
