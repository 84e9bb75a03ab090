use crate::api::{AdapterError, get_integration_at};
use crate::model::{
    Category, IntegrationType, Loader, ModCategory, Platform, Side, Status,
};
use crate::networking::{ClientConfig, PlatformClient};
use std::sync::Arc;

fn client() -> Arc<PlatformClient> {
    Arc::new(PlatformClient::new(ClientConfig::default()).unwrap())
}

const MOD_JSON: &str = r#"{
    "data": {
        "id": 100,
        "name": "Applied Energistics 2 [1.20]",
        "slug": "applied-energistics-2",
        "classId": 6,
        "status": 4,
        "downloadCount": 90000,
        "thumbsUpCount": 500,
        "dateCreated": "2014-05-01T00:00:00Z",
        "dateModified": "2024-03-01T00:00:00Z",
        "dateReleased": "2024-03-01T00:00:00Z",
        "logo": {"url": "https://media.example/logo.png"},
        "links": {"issuesUrl": "https://github.example/issues", "wikiUrl": null, "sourceUrl": ""},
        "authors": [{"id": 7, "name": "AlgorithmX2"}],
        "categories": [
            {"classId": 6, "id": 412},
            {"classId": 6, "id": 999999}
        ],
        "screenshots": [{"url": "https://media.example/s1.png"}]
    }
}"#;

const FILES_JSON: &str = r#"{
    "data": [
        {
            "id": 5001,
            "fileName": "ae2-1.20.1.jar",
            "downloadUrl": "https://edge.example/ae2-1.20.1.jar",
            "fileLength": 4096,
            "fileDate": "2024-01-10T00:00:00Z",
            "downloadCount": 1234,
            "sortableGameVersions": [
                {"gameVersionName": "Forge", "gameVersionPadded": "0"},
                {"gameVersionName": "NeoForge", "gameVersionPadded": "0"},
                {"gameVersionName": "Client", "gameVersionPadded": "0"},
                {"gameVersionName": "1.20.1", "gameVersionPadded": "0000000001.0000000020.0000000001"}
            ],
            "dependencies": [
                {"modId": 222, "relationType": 3},
                {"modId": 333, "relationType": 2}
            ]
        }
    ]
}"#;

async fn mock_curseforge(server: &mut mockito::Server) {
    server
        .mock("GET", "/mods/100")
        .match_header("x-api-key", "cf-key")
        .with_status(200)
        .with_body(MOD_JSON)
        .create_async()
        .await;
    server
        .mock("GET", "/mods/100/files?pageSize=10000")
        .match_header("x-api-key", "cf-key")
        .with_status(200)
        .with_body(FILES_JSON)
        .create_async()
        .await;
}

#[tokio::test]
async fn missing_key_fails_before_any_fetch() {
    let server = mockito::Server::new_async().await;
    let err = get_integration_at(client(), Platform::CurseForge, "100", None, &server.url())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AdapterError::MissingKey {
            platform: Platform::CurseForge
        }
    ));
}

#[tokio::test]
async fn classifies_from_numeric_tables() {
    let mut server = mockito::Server::new_async().await;
    mock_curseforge(&mut server).await;

    let integration = get_integration_at(
        client(),
        Platform::CurseForge,
        "100",
        Some("cf-key"),
        &server.url(),
    )
    .await
    .unwrap();

    assert_eq!(integration.id(), "100");
    assert_eq!(integration.integration_type(), IntegrationType::Mod);
    assert_eq!(integration.status(), Status::Approved);
    assert_eq!(integration.clean_title(), "Applied Energistics 2");
    // Unknown category ids drop out
    assert_eq!(
        integration.categories(),
        &[Category::Mod(ModCategory::Technology)]
    );
    assert_eq!(integration.authors().len(), 1);
    assert!(integration.issues().is_some());
    assert!(integration.wiki().is_none());
    assert!(integration.source().is_none());
}

#[tokio::test]
async fn splits_loaders_and_versions_from_one_array() {
    let mut server = mockito::Server::new_async().await;
    mock_curseforge(&mut server).await;

    let integration = get_integration_at(
        client(),
        Platform::CurseForge,
        "100",
        Some("cf-key"),
        &server.url(),
    )
    .await
    .unwrap();

    let file = &integration.files()[0];
    // Padded "0" entries are loader tags; Client/Server are side markers,
    // not loaders
    assert_eq!(file.declared_loaders(), &[Loader::Forge, Loader::NeoForge]);
    assert_eq!(file.game_versions(), &["1.20.1"]);
    assert_eq!(file.side(), Side::Client);
}

#[tokio::test]
async fn changelog_and_description_fetch_on_demand() {
    let mut server = mockito::Server::new_async().await;
    mock_curseforge(&mut server).await;
    let description = server
        .mock("GET", "/mods/100/description")
        .match_header("x-api-key", "cf-key")
        .with_status(200)
        .with_body(r#"{"data": "<p>About</p>"}"#)
        .create_async()
        .await;
    let changelog = server
        .mock("GET", "/mods/100/files/5001/changelog")
        .match_header("x-api-key", "cf-key")
        .with_status(200)
        .with_body(r#"{"data": "<p>Fixed crash</p>"}"#)
        .create_async()
        .await;

    let integration = get_integration_at(
        client(),
        Platform::CurseForge,
        "100",
        Some("cf-key"),
        &server.url(),
    )
    .await
    .unwrap();

    assert_eq!(integration.full_description().await.unwrap(), "<p>About</p>");
    let file = &integration.files()[0];
    assert_eq!(file.changelog().await.unwrap(), "<p>Fixed crash</p>");
    description.assert_async().await;
    changelog.assert_async().await;
}

#[tokio::test]
async fn only_relation_type_three_is_required() {
    let mut server = mockito::Server::new_async().await;
    mock_curseforge(&mut server).await;

    // Required dependency project 222; the optional 333 must not be fetched
    let dep_mod = server
        .mock("GET", "/mods/222")
        .match_header("x-api-key", "cf-key")
        .with_status(200)
        .with_body(
            MOD_JSON
                .replace("\"id\": 100", "\"id\": 222")
                .replace("applied-energistics-2", "dep-slug"),
        )
        .create_async()
        .await;
    let dep_files = server
        .mock("GET", "/mods/222/files?pageSize=10000")
        .match_header("x-api-key", "cf-key")
        .with_status(200)
        .with_body(FILES_JSON)
        .create_async()
        .await;
    let optional = server
        .mock("GET", "/mods/333")
        .expect(0)
        .create_async()
        .await;

    let integration = get_integration_at(
        client(),
        Platform::CurseForge,
        "100",
        Some("cf-key"),
        &server.url(),
    )
    .await
    .unwrap();

    let file = &integration.files()[0];
    let deps = file.dependencies().await;
    assert_eq!(deps.len(), 1);
    assert_eq!(deps[0].parent().id(), "222");
    dep_mod.assert_async().await;
    dep_files.assert_async().await;
    optional.assert_async().await;
}

#[tokio::test]
async fn plugin_files_default_to_bukkit() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/mods/200")
        .with_status(200)
        .with_body(
            MOD_JSON
                .replace("\"id\": 100", "\"id\": 200")
                .replace("\"classId\": 6,", "\"classId\": 5,"),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/mods/200/files?pageSize=10000")
        .with_status(200)
        .with_body(
            FILES_JSON.replace(
                r#"{"gameVersionName": "Forge", "gameVersionPadded": "0"},
                {"gameVersionName": "NeoForge", "gameVersionPadded": "0"},
                {"gameVersionName": "Client", "gameVersionPadded": "0"},
                "#,
                "",
            ),
        )
        .create_async()
        .await;

    let integration = get_integration_at(
        client(),
        Platform::CurseForge,
        "200",
        Some("cf-key"),
        &server.url(),
    )
    .await
    .unwrap();

    assert_eq!(integration.integration_type(), IntegrationType::Plugin);
    let file = &integration.files()[0];
    assert_eq!(file.declared_loaders(), &[Loader::Bukkit]);
    // Plugins are server-side whatever the version array says
    assert_eq!(file.side(), Side::Server);
}
