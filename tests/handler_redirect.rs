mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::json;
use url_shortener::api::handlers::redirect_handler;
use url_shortener::domain::repositories::UrlStore;
use url_shortener::infrastructure::persistence::MemoryUrlStore;

#[tokio::test]
async fn test_redirect_success() {
    let store = MemoryUrlStore::new();
    store.save("test1", "https://practicum.yandex.ru/").await;

    let app = Router::new()
        .route("/{id}", get(redirect_handler))
        .with_state(common::create_test_state(store));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/test1").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://practicum.yandex.ru/");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::create_test_server(MemoryUrlStore::new());

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "message": "URL not found", "code": 404, "status": "Not Found" })
    );
}

#[tokio::test]
async fn test_redirect_is_repeatable() {
    let store = MemoryUrlStore::new();
    store.save("AbCd-_12", "https://example.com/again").await;

    let server = common::create_test_server(store);

    for _ in 0..3 {
        let response = server.get("/AbCd-_12").await;

        assert_eq!(response.status_code(), 307);
        assert_eq!(response.header("location"), "https://example.com/again");
    }
}

#[tokio::test]
async fn test_redirect_observes_overwrite() {
    let store = MemoryUrlStore::new();
    store.save("rebound1", "https://first.example").await;

    let server = common::create_test_server(store.clone());
    assert_eq!(
        server.get("/rebound1").await.header("location"),
        "https://first.example"
    );

    store.save("rebound1", "https://second.example").await;
    assert_eq!(
        server.get("/rebound1").await.header("location"),
        "https://second.example"
    );
}

#[tokio::test]
async fn test_redirect_unrepresentable_location() {
    let store = MemoryUrlStore::new();
    store.save("badurl12", "https://example.com/\nInjected: yes").await;

    let server = common::create_test_server(store);

    server
        .get("/badurl12")
        .await
        .assert_status_internal_server_error();
}
