#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use std::sync::Arc;
use url_shortener::domain::IdGenerator;
use url_shortener::error::CoreError;
use url_shortener::infrastructure::persistence::MemoryUrlStore;
use url_shortener::routes::app_router;
use url_shortener::state::AppState;
use url_shortener::utils::code_generator::{ID_LENGTH, RandomIdGenerator};

pub const BASE_URL: &str = "http://localhost:8080";

/// Id generator whose entropy source is always unavailable.
pub struct FailingIdGenerator;

impl IdGenerator for FailingIdGenerator {
    fn generate(&self) -> Result<String, CoreError> {
        Err(CoreError::RandomSource("entropy source unavailable".to_string()))
    }
}

pub fn create_test_state(store: MemoryUrlStore) -> AppState {
    AppState::new(Arc::new(store), Arc::new(RandomIdGenerator), BASE_URL)
}

pub fn create_test_app(store: MemoryUrlStore) -> Router {
    app_router(create_test_state(store))
}

pub fn create_test_server(store: MemoryUrlStore) -> TestServer {
    TestServer::new(create_test_app(store)).unwrap()
}

pub fn create_failing_server() -> TestServer {
    let state = AppState::new(
        Arc::new(MemoryUrlStore::new()),
        Arc::new(FailingIdGenerator),
        BASE_URL,
    );
    TestServer::new(app_router(state)).unwrap()
}

/// Returns the id at the end of a short URL.
pub fn id_from_short_url(short_url: &str) -> String {
    short_url
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Returns true if `id` has the shape of a generated id.
pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LENGTH
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
