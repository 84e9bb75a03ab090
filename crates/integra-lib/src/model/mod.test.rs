use super::integration::{DescriptionSource, IntegrationInfo, RemoteHandle};
use super::*;
use crate::networking::{ClientConfig, PlatformClient};
use chrono::TimeZone;
use std::sync::Arc;

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn info(integration_type: IntegrationType, title: &str) -> Arc<IntegrationInfo> {
    let client = Arc::new(PlatformClient::new(ClientConfig::default()).unwrap());
    Arc::new(IntegrationInfo {
        remote: RemoteHandle::new(
            client,
            Platform::Modrinth,
            Platform::Modrinth.base_url(),
            None,
        ),
        id: "test".to_string(),
        title: title.to_string(),
        slug: "test".to_string(),
        integration_type,
        status: Status::Approved,
        team: None,
        categories: Vec::new(),
        authors: Vec::new(),
        published: date(2020, 1, 1),
        updated: date(2020, 1, 1),
        approved: None,
        downloads: 0,
        likes: 0,
        icon: None,
        issues: None,
        wiki: None,
        source: None,
        donation: None,
        screenshots: Vec::new(),
        description: DescriptionSource::Inline(String::new()),
        license: None,
        premium: false,
    })
}

fn file(
    parent: Arc<IntegrationInfo>,
    published: DateTime<Utc>,
    loaders: Vec<Loader>,
    versions: Vec<&str>,
    side: Side,
) -> IntegrationFile {
    IntegrationFile::new(
        FileRecord {
            id: "file-1".to_string(),
            file_name: "test.jar".to_string(),
            url: None,
            size: 1024,
            published,
            downloads: 0,
            loaders,
            game_versions: versions.into_iter().map(String::from).collect(),
            side,
            changelog: ChangelogSource::Absent,
            dependencies: Vec::new(),
        },
        parent,
    )
}

#[test]
fn mod_published_2012_targets_forge_only() {
    let f = file(
        info(IntegrationType::Mod, "Test"),
        date(2012, 1, 1),
        Vec::new(),
        vec!["1.2.5"],
        Side::Any,
    );
    assert_eq!(f.possible_loaders(), vec![Loader::Forge]);
}

#[test]
fn file_predating_every_loader_falls_back_to_any() {
    let f = file(
        info(IntegrationType::Mod, "Test"),
        date(2010, 6, 1),
        Vec::new(),
        vec!["1.0"],
        Side::Any,
    );
    assert_eq!(f.possible_loaders(), vec![Loader::Any]);
}

#[test]
fn possible_loaders_never_empty() {
    for t in [
        IntegrationType::Mod,
        IntegrationType::Plugin,
        IntegrationType::Shader,
        IntegrationType::Datapack,
        IntegrationType::World,
    ] {
        let f = file(
            info(t, "Test"),
            date(2024, 1, 1),
            Vec::new(),
            vec!["1.20.4"],
            Side::Any,
        );
        assert!(!f.possible_loaders().is_empty(), "{t:?}");
    }
}

#[test]
fn possible_versions_is_full_cross_product() {
    let f = file(
        info(IntegrationType::Mod, "Test"),
        date(2024, 1, 1),
        vec![Loader::Forge, Loader::Fabric],
        vec!["1.20.1", "1.20.4", "1.21"],
        Side::Any,
    );
    let versions = f.possible_versions();
    assert_eq!(versions.len(), 2 * 3);

    let unique: std::collections::HashSet<_> = versions.iter().collect();
    assert_eq!(unique.len(), versions.len());
}

#[test]
fn declared_any_folds_in_inferred_loaders() {
    let f = file(
        info(IntegrationType::Mod, "Test"),
        date(2019, 6, 1),
        vec![Loader::Any],
        vec!["1.14.2"],
        Side::Any,
    );
    // Forge, Cauldron, LiteLoader and Fabric existed by mid-2019
    let versions = f.possible_versions();
    assert_eq!(versions.len(), 5);
    assert!(versions.contains(&GameVersion::new(Loader::Any, "1.14.2")));
    assert!(versions.contains(&GameVersion::new(Loader::Forge, "1.14.2")));
    assert!(versions.contains(&GameVersion::new(Loader::Fabric, "1.14.2")));
    assert!(!versions.contains(&GameVersion::new(Loader::Quilt, "1.14.2")));
}

#[test]
fn explicit_loader_declaration_is_verbatim() {
    let f = file(
        info(IntegrationType::Mod, "Test"),
        date(2024, 1, 1),
        vec![Loader::Fabric],
        vec!["1.20.4"],
        Side::Any,
    );
    assert_eq!(
        f.possible_versions(),
        vec![GameVersion::new(Loader::Fabric, "1.20.4")]
    );
}

#[test]
fn empty_version_list_yields_empty_cross_product() {
    let f = file(
        info(IntegrationType::Mod, "Test"),
        date(2024, 1, 1),
        vec![Loader::Forge],
        Vec::new(),
        Side::Any,
    );
    assert!(f.possible_versions().is_empty());
}

#[test]
fn plugin_side_is_pinned_to_server() {
    for declared in [Side::Client, Side::Server, Side::Any] {
        let f = file(
            info(IntegrationType::Plugin, "Test"),
            date(2024, 1, 1),
            vec![Loader::Paper],
            vec!["1.20.4"],
            declared,
        );
        assert_eq!(f.side(), Side::Server);
    }
}

#[test]
fn non_plugin_side_is_passed_through() {
    let f = file(
        info(IntegrationType::Mod, "Test"),
        date(2024, 1, 1),
        vec![Loader::Fabric],
        vec!["1.20.4"],
        Side::Client,
    );
    assert_eq!(f.side(), Side::Client);
}

#[test]
fn empty_declared_loaders_normalize_to_any() {
    let f = file(
        info(IntegrationType::Datapack, "Test"),
        date(2024, 1, 1),
        Vec::new(),
        vec!["1.20.4"],
        Side::Any,
    );
    assert_eq!(f.declared_loaders(), &[Loader::Any]);
}

#[test]
fn duplicate_versions_are_dropped() {
    let f = file(
        info(IntegrationType::Mod, "Test"),
        date(2024, 1, 1),
        vec![Loader::Forge, Loader::Forge],
        vec!["1.20.4", "1.20.4", "1.21"],
        Side::Any,
    );
    assert_eq!(f.declared_loaders(), &[Loader::Forge]);
    assert_eq!(f.game_versions(), &["1.20.4", "1.21"]);
}

#[test]
fn snapshot_detection() {
    assert!(!GameVersion::new(Loader::Fabric, "1.20.1").is_snapshot());
    assert!(GameVersion::new(Loader::Fabric, "24w14a").is_snapshot());
    assert!(GameVersion::new(Loader::Fabric, "1.21-pre1").is_snapshot());
}

#[test]
fn game_version_display_is_lowercase_pair() {
    assert_eq!(
        GameVersion::new(Loader::NeoForge, "1.20.4").to_string(),
        "neoforge-1.20.4"
    );
}

#[test]
fn clean_title_strips_bracketed_decorations() {
    let i = info(IntegrationType::Mod, "Sodium [Fabric] (1.20) {beta} <old>");
    assert_eq!(i.clean_title(), "Sodium");

    let i = info(IntegrationType::Mod, "Iron   Chests:  Restocked");
    assert_eq!(i.clean_title(), "Iron Chests: Restocked");
}

#[test]
fn curseforge_class_id_table() {
    assert_eq!(IntegrationType::from_class_id(6), IntegrationType::Mod);
    assert_eq!(IntegrationType::from_class_id(5), IntegrationType::Plugin);
    assert_eq!(
        IntegrationType::from_class_id(12),
        IntegrationType::Resourcepack
    );
    assert_eq!(IntegrationType::from_class_id(6945), IntegrationType::Datapack);
    // Unrecognized classes land on Mod
    assert_eq!(IntegrationType::from_class_id(9999), IntegrationType::Mod);
}

#[test]
fn curseforge_status_code_table() {
    assert_eq!(Status::from_code(4), Status::Approved);
    assert_eq!(Status::from_code(10), Status::UnderReview);
    assert_eq!(Status::from_code(0), Status::Unknown);
    assert_eq!(Status::from_code(42), Status::Unknown);
}

#[test]
fn status_tag_parsing_falls_back_to_unknown() {
    assert_eq!(Status::from_tag("approved"), Status::Approved);
    assert_eq!(Status::from_tag("ARCHIVED"), Status::Unknown);
}

#[test]
fn implementation_type_per_integration_type() {
    assert_eq!(
        IntegrationType::Mod.implementation_type(),
        ImplementationType::Maven
    );
    assert_eq!(
        IntegrationType::Plugin.implementation_type(),
        ImplementationType::Download
    );
    assert_eq!(
        IntegrationType::Addon.implementation_type(),
        ImplementationType::Download
    );
    assert_eq!(
        IntegrationType::Shader.implementation_type(),
        ImplementationType::None
    );
}

#[test]
fn loader_tag_parsing() {
    assert_eq!(Loader::from_tag("fabric"), Some(Loader::Fabric));
    assert_eq!(Loader::from_tag("NeoForge"), Some(Loader::NeoForge));
    assert_eq!(Loader::from_tag("datapack"), Some(Loader::Any));
    assert_eq!(Loader::from_tag("minecraft"), Some(Loader::Any));
    assert_eq!(Loader::from_tag("gregtech"), None);
}

#[test]
fn known_handles_point_at_their_platforms() {
    assert_eq!(known::sodium().platform, Platform::Modrinth);
    assert_eq!(known::jei().platform, Platform::CurseForge);
    assert_eq!(known::essentialsx().identifier, "9089");
    assert_eq!(
        known::fabric_api(),
        LazyIntegration::new(Platform::Modrinth, "P7dR8mSH")
    );
}

#[test]
fn loader_creation_order() {
    assert!(Loader::Forge.created() < Loader::Fabric.created());
    assert!(Loader::Any.created() <= Loader::Bukkit.created());
    assert!(Loader::Fabric.created() < Loader::Quilt.created());
}
