//! Handler for the link shortening endpoint.

use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::{AppError, CoreError};
use crate::state::AppState;

/// Creates a short URL for the raw URL sent as the request body.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// The original URL as plain text, e.g. `https://example.com/page`. It is
/// stored exactly as sent.
///
/// # Response
///
/// `201 Created` with `Content-Type: text/plain` and the short URL as body:
///
/// ```text
/// http://localhost:8080/AbCd-_12
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is empty or not valid UTF-8.
/// Returns 500 Internal Server Error if id generation fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let original_url = std::str::from_utf8(&body)
        .map_err(|e| CoreError::InvalidInput(format!("body is not UTF-8: {e}")))?;

    let created = state.link_service.create(original_url).await?;

    Ok((
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "text/plain")],
        created.short_url,
    ))
}
