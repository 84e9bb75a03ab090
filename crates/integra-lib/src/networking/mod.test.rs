use super::*;

#[tokio::test]
async fn rejects_zero_concurrency() {
    let config = ClientConfig {
        max_inflight: Some(0),
        timeout_seconds: 5,
    };
    assert!(matches!(
        PlatformClient::new(config),
        Err(TransportError::InvalidConcurrency { count: 0 })
    ));
}

#[tokio::test]
async fn derives_concurrency_when_unset() {
    let client = PlatformClient::new(ClientConfig::default()).unwrap();
    assert!(client.inflight_limit() > 0);
}

#[tokio::test]
async fn surfaces_http_status_errors() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/missing")
        .with_status(404)
        .create_async()
        .await;

    let client = PlatformClient::new(ClientConfig::default()).unwrap();
    let url = format!("{}/missing", server.url());
    let err = client.get_text(&url, None).await.unwrap_err();

    assert!(matches!(err, TransportError::Status { status: 404, .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn forwards_auth_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/guarded")
        .match_header("x-api-key", "secret")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = PlatformClient::new(ClientConfig::default()).unwrap();
    let url = format!("{}/guarded", server.url());
    let map = client
        .fetch_object(&url, Some(("x-api-key", "secret")))
        .await
        .unwrap();

    assert!(map.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn shape_mismatch_is_unexpected_payload() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/list")
        .with_status(200)
        .with_body("{\"not\": \"an array\"}")
        .create_async()
        .await;

    let client = PlatformClient::new(ClientConfig::default()).unwrap();
    let url = format!("{}/list", server.url());
    let err = client.fetch_array(&url, None).await.unwrap_err();

    assert!(matches!(
        err,
        TransportError::UnexpectedPayload {
            expected: "array",
            ..
        }
    ));
}
