//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short link routes.
///
/// # Endpoints
///
/// - `POST /`            - Create a short link from a raw URL body
/// - `GET  /api/health` - Service health and link count
/// - `GET  /{id}`        - Redirect to the original URL
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(shorten_handler))
        .route("/api/health", get(health_handler))
        .route("/{id}", get(redirect_handler))
}
