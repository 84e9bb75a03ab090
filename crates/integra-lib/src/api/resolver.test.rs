use super::*;
use crate::api::get_integration_at;
use crate::networking::{ClientConfig, PlatformClient};

fn client() -> Arc<PlatformClient> {
    Arc::new(PlatformClient::new(ClientConfig::default()).unwrap())
}

fn project_json(id: &str) -> String {
    format!(
        r#"{{
            "id": "{id}",
            "title": "{id}",
            "slug": "{id}",
            "project_type": "mod",
            "status": "approved",
            "body": "",
            "categories": [],
            "team": null,
            "published": "2023-01-01T00:00:00Z",
            "updated": "2023-01-01T00:00:00Z",
            "downloads": 0,
            "followers": 0,
            "client_side": "required",
            "server_side": "required"
        }}"#
    )
}

fn versions_json(file_id: &str, dep_project: Option<&str>) -> String {
    let dependencies = match dep_project {
        Some(project) => format!(
            r#"[{{"dependency_type": "required", "project_id": "{project}", "version_id": null}}]"#
        ),
        None => "[]".to_string(),
    };
    format!(
        r#"[{{
            "id": "{file_id}",
            "changelog": "",
            "date_published": "2023-06-01T00:00:00Z",
            "downloads": 0,
            "loaders": ["fabric"],
            "game_versions": ["1.20.1"],
            "files": [{{"url": "https://cdn.example/{file_id}.jar", "filename": "{file_id}.jar", "primary": true, "size": 1}}],
            "dependencies": {dependencies}
        }}]"#
    )
}

async fn mock_project(server: &mut mockito::Server, id: &str, dep: Option<&str>) {
    server
        .mock("GET", format!("/project/{id}").as_str())
        .with_status(200)
        .with_body(project_json(id))
        .create_async()
        .await;
    server
        .mock("GET", format!("/project/{id}/version").as_str())
        .with_status(200)
        .with_body(versions_json(&format!("{id}-file"), dep))
        .create_async()
        .await;
}

#[tokio::test]
async fn walks_a_linear_chain() {
    let mut server = mockito::Server::new_async().await;
    mock_project(&mut server, "a", Some("b")).await;
    mock_project(&mut server, "b", Some("c")).await;
    mock_project(&mut server, "c", None).await;

    let integration = get_integration_at(client(), Platform::Modrinth, "a", None, &server.url())
        .await
        .unwrap();
    let root = integration.files()[0].clone();

    let resolution = resolve_transitive(&root, &ResolutionLimits::default()).await;

    let order: Vec<&str> = resolution.order().iter().map(|f| f.parent().id()).collect();
    assert_eq!(order, vec!["b", "c"]);
    assert_eq!(resolution.graph().node_count(), 3);
    assert_eq!(resolution.graph().edge_count(), 2);
    assert!(!resolution.has_cycles());
}

#[tokio::test]
async fn mutual_cycle_terminates_and_is_reported() {
    let mut server = mockito::Server::new_async().await;
    mock_project(&mut server, "a", Some("b")).await;
    mock_project(&mut server, "b", Some("a")).await;

    let integration = get_integration_at(client(), Platform::Modrinth, "a", None, &server.url())
        .await
        .unwrap();
    let root = integration.files()[0].clone();

    let resolution = resolve_transitive(&root, &ResolutionLimits::default()).await;

    // b resolves once; the edge back to a is recorded but not re-expanded
    let order: Vec<&str> = resolution.order().iter().map(|f| f.parent().id()).collect();
    assert_eq!(order, vec!["b"]);
    assert_eq!(resolution.graph().node_count(), 2);
    assert_eq!(resolution.graph().edge_count(), 2);
    assert!(resolution.has_cycles());
}

#[tokio::test]
async fn depth_limit_stops_expansion() {
    let mut server = mockito::Server::new_async().await;
    mock_project(&mut server, "a", Some("b")).await;
    mock_project(&mut server, "b", Some("c")).await;
    mock_project(&mut server, "c", None).await;

    let integration = get_integration_at(client(), Platform::Modrinth, "a", None, &server.url())
        .await
        .unwrap();
    let root = integration.files()[0].clone();

    let limits = ResolutionLimits { max_depth: 1 };
    let resolution = resolve_transitive(&root, &limits).await;

    // Only the root expands; b is discovered but its own chain is not
    let order: Vec<&str> = resolution.order().iter().map(|f| f.parent().id()).collect();
    assert_eq!(order, vec!["b"]);
    assert!(!resolution.has_cycles());
}
