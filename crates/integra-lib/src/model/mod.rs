//! Unified integration model
//!
//! Platform-neutral entities that every adapter populates: projects
//! ([`Integration`]), their published files ([`IntegrationFile`]), loaders,
//! synthesized game versions, categories and authors. All accessors are
//! read-only; an entity never mutates after construction.

use chrono::{DateTime, Utc};
use std::fmt;
use url::Url;

mod category;
mod file;
mod integration;
mod loader;
mod version;

pub use category::{
    AddonCategory, Category, CustomizationCategory, DatapackCategory, ModCategory,
    ModpackCategory, PluginCategory, ResourcepackCategory, ShaderCategory, WorldCategory,
};
pub use file::{ChangelogSource, DependencyRef, FileRecord, IntegrationFile};
pub use integration::{DescriptionSource, Integration, IntegrationInfo, RemoteHandle};
pub use loader::Loader;
pub use version::GameVersion;

/// Supported hosting platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Platform {
    Modrinth,
    #[value(name = "curseforge")]
    CurseForge,
    Spiget,
}

impl Platform {
    /// API root for this platform, no trailing slash
    pub fn base_url(self) -> &'static str {
        match self {
            Platform::Modrinth => "https://api.modrinth.com/v2",
            Platform::CurseForge => "https://api.curseforge.com/v1",
            Platform::Spiget => "https://api.spiget.org/v2",
        }
    }

    /// Whether requests fail without an API key
    pub fn key_required(self) -> bool {
        matches!(self, Platform::CurseForge)
    }

    /// Header that carries the API key when one is supplied
    pub fn auth_header(self) -> &'static str {
        match self {
            Platform::CurseForge => "x-api-key",
            Platform::Modrinth | Platform::Spiget => "Authorization",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Modrinth => "modrinth",
            Platform::CurseForge => "curseforge",
            Platform::Spiget => "spiget",
        };
        f.write_str(name)
    }
}

/// What kind of artifact a project distributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegrationType {
    Mod,
    Plugin,
    Datapack,
    Resourcepack,
    Shader,
    Modpack,
    Addon,
    Customization,
    World,
}

impl IntegrationType {
    /// The named loader family for this type
    ///
    /// Types without a meaningful loader concept map to `[Any]`.
    pub fn loaders(self) -> &'static [Loader] {
        use Loader::*;
        match self {
            IntegrationType::Mod | IntegrationType::Modpack => {
                &[Forge, Cauldron, LiteLoader, Fabric, Quilt, NeoForge]
            }
            IntegrationType::Plugin => &[
                Bukkit, Spigot, Paper, Purpur, Velocity, Folia, Waterfall, Sponge, BungeeCord,
            ],
            IntegrationType::Shader => &[Vanilla, Iris, OptiFine, Canvas],
            IntegrationType::Datapack
            | IntegrationType::Resourcepack
            | IntegrationType::Addon
            | IntegrationType::Customization
            | IntegrationType::World => &[Any],
        }
    }

    /// How downstream build tooling consumes this artifact
    pub fn implementation_type(self) -> ImplementationType {
        match self {
            IntegrationType::Mod => ImplementationType::Maven,
            IntegrationType::Plugin | IntegrationType::Addon => ImplementationType::Download,
            _ => ImplementationType::None,
        }
    }

    /// Parse a platform project-type tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        let t = match tag.to_ascii_lowercase().as_str() {
            "mod" => IntegrationType::Mod,
            "plugin" => IntegrationType::Plugin,
            "datapack" => IntegrationType::Datapack,
            "resourcepack" => IntegrationType::Resourcepack,
            "shader" => IntegrationType::Shader,
            "modpack" => IntegrationType::Modpack,
            "addon" => IntegrationType::Addon,
            "customization" => IntegrationType::Customization,
            "world" => IntegrationType::World,
            _ => return None,
        };
        Some(t)
    }

    /// Classify from a CurseForge numeric class id
    pub fn from_class_id(class_id: i64) -> Self {
        match class_id {
            6 => IntegrationType::Mod,
            5 => IntegrationType::Plugin,
            12 => IntegrationType::Resourcepack,
            17 => IntegrationType::World,
            4546 => IntegrationType::Customization,
            4471 => IntegrationType::Modpack,
            4559 => IntegrationType::Addon,
            6552 => IntegrationType::Shader,
            6945 => IntegrationType::Datapack,
            _ => IntegrationType::Mod,
        }
    }
}

/// Review status of a project on its platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    New,
    ChangesRequired,
    UnderSoftReview,
    Approved,
    Rejected,
    ChangesMade,
    Inactive,
    Abandoned,
    Deleted,
    UnderReview,
    Unknown,
}

impl Status {
    /// Parse a textual status tag, falling back to `Unknown`
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "new" => Status::New,
            "changes_required" => Status::ChangesRequired,
            "under_soft_review" => Status::UnderSoftReview,
            "approved" => Status::Approved,
            "rejected" => Status::Rejected,
            "changes_made" => Status::ChangesMade,
            "inactive" => Status::Inactive,
            "abandoned" => Status::Abandoned,
            "deleted" => Status::Deleted,
            "under_review" | "processing" => Status::UnderReview,
            _ => Status::Unknown,
        }
    }

    /// Classify from a CurseForge numeric status code
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Status::New,
            2 => Status::ChangesRequired,
            3 => Status::UnderSoftReview,
            4 => Status::Approved,
            5 => Status::Rejected,
            6 => Status::ChangesMade,
            7 => Status::Inactive,
            8 => Status::Abandoned,
            9 => Status::Deleted,
            10 => Status::UnderReview,
            _ => Status::Unknown,
        }
    }
}

/// Which game environment a file is required on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Client,
    Server,
    Any,
}

/// How build tooling should pull an artifact in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImplementationType {
    None,
    Download,
    Maven,
}

/// Someone credited on a project
#[derive(Debug, Clone)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub avatar: Option<Url>,
    pub registered: Option<DateTime<Utc>>,
    pub platform: Platform,
}

/// A platform/identifier pair that has not been fetched yet
///
/// Stores just enough to retrieve the full [`Integration`] later.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LazyIntegration {
    pub platform: Platform,
    pub identifier: String,
}

impl LazyIntegration {
    pub fn new(platform: Platform, identifier: impl Into<String>) -> Self {
        Self {
            platform,
            identifier: identifier.into(),
        }
    }
}

/// Handles for a few widely-deployed integrations
pub mod known {
    use super::{LazyIntegration, Platform};

    pub fn sodium() -> LazyIntegration {
        LazyIntegration::new(Platform::Modrinth, "AANobbMI")
    }

    pub fn fabric_api() -> LazyIntegration {
        LazyIntegration::new(Platform::Modrinth, "P7dR8mSH")
    }

    pub fn jei() -> LazyIntegration {
        LazyIntegration::new(Platform::CurseForge, "238222")
    }

    pub fn essentialsx() -> LazyIntegration {
        LazyIntegration::new(Platform::Spiget, "9089")
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
