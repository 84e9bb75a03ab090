use crate::api::get_integration_at;
use crate::model::{
    Category, GameVersion, IntegrationType, Loader, ModCategory, Platform, Side, Status,
};
use crate::networking::{ClientConfig, PlatformClient};
use std::sync::Arc;

fn client() -> Arc<PlatformClient> {
    Arc::new(PlatformClient::new(ClientConfig::default()).unwrap())
}

fn project_json(id: &str, slug: &str) -> String {
    format!(
        r#"{{
            "id": "{id}",
            "title": "Sodium (Fabric)",
            "slug": "{slug}",
            "project_type": "mod",
            "status": "approved",
            "body": "Long form description",
            "categories": ["optimization", "cursed", "not-a-real-tag"],
            "team": "team1",
            "published": "2021-01-01T00:00:00Z",
            "updated": "2024-02-02T00:00:00Z",
            "approved": "2021-01-02T00:00:00Z",
            "downloads": 5000,
            "followers": 120,
            "icon_url": "https://cdn.example/icon.png",
            "issues_url": "",
            "source_url": "not a url",
            "donation_urls": [],
            "gallery": [{{"url": "https://cdn.example/shot1.png"}}],
            "license": {{"id": "LGPL-3.0-only"}},
            "client_side": "required",
            "server_side": "unsupported"
        }}"#
    )
}

fn versions_json(dep_project: &str, dep_version: Option<&str>) -> String {
    let version_id = match dep_version {
        Some(v) => format!("\"{v}\""),
        None => "null".to_string(),
    };
    format!(
        r#"[
            {{
                "id": "v1",
                "changelog": "Initial release",
                "date_published": "2024-01-15T00:00:00Z",
                "downloads": 300,
                "loaders": ["fabric", "unknown-loader"],
                "game_versions": ["1.20.1", "1.20.1", "1.20.4"],
                "files": [
                    {{"url": "https://cdn.example/extra.jar", "filename": "extra.jar", "primary": false, "size": 10}},
                    {{"url": "https://cdn.example/main.jar", "filename": "main.jar", "primary": true, "size": 2048}}
                ],
                "dependencies": [
                    {{"dependency_type": "required", "project_id": "{dep_project}", "version_id": {version_id}}},
                    {{"dependency_type": "optional", "project_id": "ignored", "version_id": null}}
                ]
            }},
            {{
                "id": "v0",
                "changelog": "",
                "date_published": "2023-01-01T00:00:00Z",
                "downloads": 10,
                "loaders": [],
                "game_versions": [],
                "files": [],
                "dependencies": []
            }}
        ]"#
    )
}

const TEAM_JSON: &str = r#"[
    {"user": {"id": "u1", "username": "jellysquid", "name": null,
              "avatar_url": "https://cdn.example/u1.png", "created": "2019-01-01T00:00:00Z"}},
    {"user": {"id": "u2", "username": "other", "name": "Other Dev",
              "avatar_url": null, "created": null}}
]"#;

async fn mock_project(
    server: &mut mockito::Server,
    id: &str,
    versions: &str,
) -> (mockito::Mock, mockito::Mock) {
    let project = server
        .mock("GET", format!("/project/{id}").as_str())
        .with_status(200)
        .with_body(project_json(id, id))
        .create_async()
        .await;
    let version_list = server
        .mock("GET", format!("/project/{id}/version").as_str())
        .with_status(200)
        .with_body(versions)
        .create_async()
        .await;
    (project, version_list)
}

#[tokio::test]
async fn builds_integration_from_project_and_versions() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = mock_project(&mut server, "sodium", &versions_json("dep", None)).await;
    let _team = server
        .mock("GET", "/team/team1/members")
        .with_status(200)
        .with_body(TEAM_JSON)
        .create_async()
        .await;

    let integration = get_integration_at(
        client(),
        Platform::Modrinth,
        "sodium",
        None,
        &server.url(),
    )
    .await
    .unwrap();

    assert_eq!(integration.id(), "sodium");
    assert_eq!(integration.title(), "Sodium (Fabric)");
    assert_eq!(integration.clean_title(), "Sodium");
    assert_eq!(integration.integration_type(), IntegrationType::Mod);
    assert_eq!(integration.status(), Status::Approved);
    assert_eq!(integration.downloads(), 5000);
    assert_eq!(integration.likes(), 120);
    assert_eq!(integration.license(), Some("LGPL-3.0-only"));
    assert_eq!(integration.team(), Some("team1"));
    assert_eq!(integration.screenshots().len(), 1);
    // Empty and malformed URL fields become absent, never errors
    assert!(integration.issues().is_none());
    assert!(integration.source().is_none());
    assert!(integration.icon().is_some());

    // Unknown category slugs are dropped, known ones mapped
    assert!(integration
        .categories()
        .contains(&Category::Mod(ModCategory::Performance)));
    assert!(integration.categories().contains(&Category::Cursed));
    assert_eq!(integration.categories().len(), 2);

    assert_eq!(integration.full_description().await.unwrap(), "Long form description");

    // Team members resolve best-effort; display name wins over username
    let authors = integration.authors();
    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].name, "jellysquid");
    assert_eq!(authors[1].name, "Other Dev");
    assert!(authors[0].registered.is_some());
}

#[tokio::test]
async fn picks_primary_file_and_skips_fileless_versions() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = mock_project(&mut server, "sodium", &versions_json("dep", None)).await;
    let _team = server
        .mock("GET", "/team/team1/members")
        .with_status(404)
        .create_async()
        .await;

    let integration = get_integration_at(
        client(),
        Platform::Modrinth,
        "sodium",
        None,
        &server.url(),
    )
    .await
    .unwrap();

    // v0 has no files and is dropped; an unreachable team is tolerated
    let files = integration.files();
    assert_eq!(files.len(), 1);
    assert!(integration.authors().is_empty());

    let file = &files[0];
    assert_eq!(file.id(), "v1");
    assert_eq!(file.file_name(), "main.jar");
    assert_eq!(file.size(), 2048);
    assert_eq!(file.changelog().await.unwrap(), "Initial release");

    // Unknown loader tags drop out; explicit declaration is verbatim
    assert_eq!(file.declared_loaders(), &[Loader::Fabric]);
    assert_eq!(file.game_versions(), &["1.20.1", "1.20.4"]);
    assert_eq!(
        file.possible_versions(),
        vec![
            GameVersion::new(Loader::Fabric, "1.20.1"),
            GameVersion::new(Loader::Fabric, "1.20.4"),
        ]
    );

    // client_side required + server_side unsupported pins the client
    assert_eq!(file.side(), Side::Client);
}

#[tokio::test]
async fn resolves_dependency_by_exact_version_id() {
    let mut server = mockito::Server::new_async().await;
    let _root = mock_project(&mut server, "root", &versions_json("dep", Some("v1"))).await;
    let _dep = mock_project(&mut server, "dep", &versions_json("other", None)).await;
    let _team = server
        .mock("GET", "/team/team1/members")
        .with_status(404)
        .expect_at_least(1)
        .create_async()
        .await;

    let integration =
        get_integration_at(client(), Platform::Modrinth, "root", None, &server.url())
            .await
            .unwrap();

    let file = &integration.files()[0];
    let deps = file.dependencies().await;
    assert_eq!(deps.len(), 1);
    assert_eq!(deps[0].id(), "v1");
    assert_eq!(deps[0].parent().id(), "dep");
}

#[tokio::test]
async fn resolves_dependency_by_version_overlap() {
    let mut server = mockito::Server::new_async().await;
    let _root = mock_project(&mut server, "root", &versions_json("dep", None)).await;
    let _dep = mock_project(&mut server, "dep", &versions_json("other", None)).await;
    let _team = server
        .mock("GET", "/team/team1/members")
        .with_status(404)
        .expect_at_least(1)
        .create_async()
        .await;

    let integration =
        get_integration_at(client(), Platform::Modrinth, "root", None, &server.url())
            .await
            .unwrap();

    // Both sides are fabric 1.20.x, so the first file in list order matches
    let file = &integration.files()[0];
    let deps = file.dependencies().await;
    assert_eq!(deps.len(), 1);
    assert_eq!(deps[0].id(), "v1");
}

#[tokio::test]
async fn dependency_resolution_is_memoized() {
    let mut server = mockito::Server::new_async().await;
    let _root = mock_project(&mut server, "root", &versions_json("dep", Some("v1"))).await;
    let _team = server
        .mock("GET", "/team/team1/members")
        .with_status(404)
        .expect_at_least(1)
        .create_async()
        .await;

    // The dependency project may be fetched once only
    let dep_project = server
        .mock("GET", "/project/dep")
        .with_status(200)
        .with_body(project_json("dep", "dep"))
        .expect(1)
        .create_async()
        .await;
    let dep_versions = server
        .mock("GET", "/project/dep/version")
        .with_status(200)
        .with_body(versions_json("other", None))
        .expect(1)
        .create_async()
        .await;

    let integration =
        get_integration_at(client(), Platform::Modrinth, "root", None, &server.url())
            .await
            .unwrap();

    let file = &integration.files()[0];
    let first = file.dependencies().await.to_vec();
    let second = file.dependencies().await.to_vec();

    assert_eq!(first.len(), 1);
    assert!(Arc::ptr_eq(&first[0], &second[0]));
    dep_project.assert_async().await;
    dep_versions.assert_async().await;
}

#[tokio::test]
async fn unresolvable_dependency_is_omitted() {
    let mut server = mockito::Server::new_async().await;
    let _root = mock_project(&mut server, "root", &versions_json("missing", None)).await;
    let _team = server
        .mock("GET", "/team/team1/members")
        .with_status(404)
        .create_async()
        .await;
    let _gone = server
        .mock("GET", "/project/missing")
        .with_status(404)
        .create_async()
        .await;

    let integration =
        get_integration_at(client(), Platform::Modrinth, "root", None, &server.url())
            .await
            .unwrap();

    let file = &integration.files()[0];
    assert!(file.dependencies().await.is_empty());
}

#[tokio::test]
async fn unknown_project_type_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _project = server
        .mock("GET", "/project/weird")
        .with_status(200)
        .with_body(project_json("weird", "weird").replace("\"mod\"", "\"hologram\""))
        .create_async()
        .await;
    let _versions = server
        .mock("GET", "/project/weird/version")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let err = get_integration_at(client(), Platform::Modrinth, "weird", None, &server.url())
        .await
        .unwrap_err();
    assert!(matches!(err, crate::api::AdapterError::Decode { .. }));
}
