use crate::api::get_integration_at;
use crate::model::{
    Category, IntegrationType, Loader, Platform, PluginCategory, Side, Status,
};
use crate::networking::{ClientConfig, PlatformClient};
use std::sync::Arc;

fn client() -> Arc<PlatformClient> {
    Arc::new(PlatformClient::new(ClientConfig::default()).unwrap())
}

const RESOURCE_JSON: &str = r#"{
    "id": 9089,
    "name": "EssentialsX",
    "file": {"url": "resources/essentialsx.9089/download?version="},
    "releaseDate": 1430438401000,
    "updateDate": 1700000000000,
    "downloads": 250000,
    "likes": 900,
    "testedVersions": ["1.19", "1.20"],
    "category": {"id": 18},
    "icon": {"url": "data/resource_icons/9/9089.jpg"},
    "donationLink": "https://donate.example/essx",
    "documentation": "https://wiki.example/essx",
    "sourceCodeLink": "https://github.example/essx",
    "premium": false,
    "contributors": "mdcfe, JRoy",
    "author": {"id": 12345},
    "description": "PGVzc2VudGlhbHM+"
}"#;

const VERSIONS_JSON: &str = r#"[
    {"id": 501, "name": "2.20.1", "downloads": 4000},
    {"id": 500, "name": "2.20.0", "downloads": 9000}
]"#;

const AUTHOR_JSON: &str = r#"{
    "id": 12345,
    "name": "mdcfe",
    "icon": {"url": "data/avatars/l/12345.jpg"}
}"#;

async fn mock_spiget(server: &mut mockito::Server) {
    server
        .mock("GET", "/resources/9089")
        .with_status(200)
        .with_body(RESOURCE_JSON)
        .create_async()
        .await;
    server
        .mock("GET", "/resources/9089/versions?size=10000")
        .with_status(200)
        .with_body(VERSIONS_JSON)
        .create_async()
        .await;
    server
        .mock("GET", "/authors/12345")
        .with_status(200)
        .with_body(AUTHOR_JSON)
        .create_async()
        .await;
}

#[tokio::test]
async fn everything_on_spiget_is_a_plugin() {
    let mut server = mockito::Server::new_async().await;
    mock_spiget(&mut server).await;

    let integration =
        get_integration_at(client(), Platform::Spiget, "9089", None, &server.url())
            .await
            .unwrap();

    assert_eq!(integration.id(), "9089");
    assert_eq!(integration.integration_type(), IntegrationType::Plugin);
    assert_eq!(integration.status(), Status::Unknown);
    assert_eq!(integration.slug(), "essentialsx");
    assert_eq!(
        integration.categories(),
        &[Category::Plugin(PluginCategory::WorldEditingAndManagement)]
    );
    assert_eq!(integration.downloads(), 250000);
    assert_eq!(integration.likes(), 900);
    assert!(integration.donation().is_some());
    assert!(integration.wiki().is_some());
    assert!(integration.screenshots().is_empty());
    // Epoch-millisecond dates
    assert_eq!(integration.published().timestamp(), 1430438401);
}

#[tokio::test]
async fn named_author_resolves_and_contributors_append() {
    let mut server = mockito::Server::new_async().await;
    mock_spiget(&mut server).await;

    let integration =
        get_integration_at(client(), Platform::Spiget, "9089", None, &server.url())
            .await
            .unwrap();

    let authors = integration.authors();
    // mdcfe resolves by id and is not duplicated from the contributor list
    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].id, "12345");
    assert_eq!(authors[0].name, "mdcfe");
    assert!(authors[0].registered.is_none());
    assert_eq!(authors[1].name, "JRoy");
    assert!(authors[1].id.is_empty());
}

#[tokio::test]
async fn files_carry_spigot_defaults() {
    let mut server = mockito::Server::new_async().await;
    mock_spiget(&mut server).await;

    let integration =
        get_integration_at(client(), Platform::Spiget, "9089", None, &server.url())
            .await
            .unwrap();

    let files = integration.files();
    assert_eq!(files.len(), 2);

    let file = &files[0];
    assert_eq!(file.id(), "501");
    assert_eq!(file.file_name(), "2.20.1.jar");
    assert_eq!(file.size(), 1);
    assert_eq!(file.downloads(), 4000);
    assert_eq!(file.declared_loaders(), &[Loader::Spigot, Loader::Paper]);
    assert_eq!(file.game_versions(), &["1.19", "1.20"]);
    assert_eq!(file.side(), Side::Server);
    assert_eq!(file.changelog().await.unwrap(), "");
    assert!(file.dependencies().await.is_empty());

    // Download URL targets the site with the version id appended
    let url = file.url().unwrap().as_str();
    assert_eq!(
        url,
        "https://www.spigotmc.org/resources/essentialsx.9089/download?version=501"
    );
}

#[tokio::test]
async fn unreachable_author_degrades_to_contributors_only() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/resources/9089")
        .with_status(200)
        .with_body(RESOURCE_JSON)
        .create_async()
        .await;
    server
        .mock("GET", "/resources/9089/versions?size=10000")
        .with_status(200)
        .with_body(VERSIONS_JSON)
        .create_async()
        .await;
    server
        .mock("GET", "/authors/12345")
        .with_status(500)
        .create_async()
        .await;

    let integration =
        get_integration_at(client(), Platform::Spiget, "9089", None, &server.url())
            .await
            .unwrap();

    let authors = integration.authors();
    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].name, "mdcfe");
    assert_eq!(authors[1].name, "JRoy");
}
