//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// Always answers with `307 Temporary Redirect` so clients re-resolve the id
/// on every visit.
///
/// # Errors
///
/// Returns 404 Not Found if the id is not bound.
/// Returns 500 Internal Server Error if the stored URL cannot be sent as a
/// `Location` header (e.g. it contains control characters).
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.link_service.resolve(&id).await?;

    let location = HeaderValue::from_str(&original_url).map_err(|_| {
        tracing::warn!("Stored URL for {} is not a valid Location header", id);
        AppError::internal("Stored URL is not a valid redirect target")
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}
