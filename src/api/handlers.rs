//! API handlers

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::api::{ApiError, AppState};
use crate::types::Album;
use crate::Error;

/// Health check with catalog size
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        albums: state.catalog.len().await,
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub albums: usize,
}

/// List every album in catalog order
pub async fn list_albums(State(state): State<AppState>) -> Json<Vec<Album>> {
    let albums = state.catalog.list().await;
    tracing::debug!(count = albums.len(), "Listing albums");
    Json(albums)
}

/// Fetch the first album with a matching id
pub async fn get_album(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Album>, ApiError> {
    let Path(id) = id.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected album id");
        ApiError::from(rejection)
    })?;

    let album = state.catalog.get(&id).await.map_err(|e| {
        tracing::warn!(album_id = %id, "Album not found");
        ApiError::from(e)
    })?;

    Ok(Json(album))
}

/// Append an album to the catalog and echo it back
///
/// The body is decoded as JSON whatever the `Content-Type` header says; only
/// a body that does not deserialize into an album is rejected.
pub async fn create_album(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Album>), ApiError> {
    let album: Album = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected album payload");
        ApiError::from(Error::from(e))
    })?;

    let duplicate = state.catalog.insert(album.clone()).await;
    if duplicate {
        tracing::warn!(album_id = %album.id, "Album id already present; appended anyway");
    }
    tracing::info!(album_id = %album.id, title = %album.title, "Album created");

    Ok((StatusCode::CREATED, Json(album)))
}
