use super::*;

fn client() -> Arc<PlatformClient> {
    Arc::new(PlatformClient::new(crate::networking::ClientConfig::default()).unwrap())
}

#[tokio::test]
async fn modrinth_display_name_wins_over_username() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/user/u1")
        .with_status(200)
        .with_body(
            r#"{"id": "u1", "username": "jelly", "name": "Jelly Squid",
                "avatar_url": "https://cdn.example/u1.png", "created": "2019-01-01T00:00:00Z"}"#,
        )
        .create_async()
        .await;

    let author = get_author_at(client(), Platform::Modrinth, "u1", None, &server.url())
        .await
        .unwrap();

    assert_eq!(author.name, "Jelly Squid");
    assert_eq!(author.platform, Platform::Modrinth);
    assert!(author.avatar.is_some());
    assert!(author.registered.is_some());
}

#[tokio::test]
async fn modrinth_falls_back_to_username() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/user/u2")
        .with_status(200)
        .with_body(r#"{"id": "u2", "username": "plain", "name": null}"#)
        .create_async()
        .await;

    let author = get_author_at(client(), Platform::Modrinth, "u2", None, &server.url())
        .await
        .unwrap();

    assert_eq!(author.name, "plain");
    assert!(author.avatar.is_none());
    assert!(author.registered.is_none());
}

#[tokio::test]
async fn curseforge_unwraps_the_data_envelope() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/42")
        .match_header("x-api-key", "cf-key")
        .with_status(200)
        .with_body(
            r#"{"data": {"id": 42, "displayName": "AlgorithmX2",
                "avatarUrl": "https://media.example/42.png",
                "dateCreated": "2013-05-01T00:00:00Z"}}"#,
        )
        .create_async()
        .await;

    let author = get_author_at(
        client(),
        Platform::CurseForge,
        "42",
        Some("cf-key"),
        &server.url(),
    )
    .await
    .unwrap();

    assert_eq!(author.id, "42");
    assert_eq!(author.name, "AlgorithmX2");
    assert!(author.registered.is_some());
}

#[tokio::test]
async fn curseforge_requires_a_key() {
    let server = mockito::Server::new_async().await;
    let err = get_author_at(client(), Platform::CurseForge, "42", None, &server.url())
        .await
        .unwrap_err();
    assert!(matches!(err, AdapterError::MissingKey { .. }));
}

#[tokio::test]
async fn spiget_never_has_a_registration_date() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/authors/12345")
        .with_status(200)
        .with_body(r#"{"id": 12345, "name": "mdcfe", "icon": {"url": "data/avatars/l/12345.jpg"}}"#)
        .create_async()
        .await;

    let author = get_author_at(client(), Platform::Spiget, "12345", None, &server.url())
        .await
        .unwrap();

    assert_eq!(author.id, "12345");
    assert_eq!(author.name, "mdcfe");
    assert!(author.registered.is_none());
    assert!(author.avatar.is_some());
}
