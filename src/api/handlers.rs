//! Request handlers for the bookmark endpoints.
//!
//! Each handler validates before touching storage, runs the storage
//! operation on the blocking thread pool, and shapes the HTTP response.
//! Existence is always an explicit `get_by_id` check, never inferred from
//! an affected-row count.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::info;

use super::error::ApiError;
use super::extractors::JsonBody;
use super::router::BOOKMARKS_PATH;
use crate::database::Database;
use crate::services::sanitizer::sanitize_bookmark;
use crate::services::validator::{validate_create, validate_update};
use crate::store::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::types::bookmark::{Bookmark, CreateBookmarkPayload, UpdateBookmarkPayload};
use crate::types::errors::StoreError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Runs a store operation on the blocking pool and flattens the result.
///
/// SQLite calls are synchronous, so the handler suspends on the join handle
/// instead of blocking an async worker thread.
async fn with_store<T, F>(db: Arc<Database>, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&mut BookmarkStore) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let conn = db.connection();
        let mut store = BookmarkStore::new(&conn);
        op(&mut store)
    })
    .await
    .map_err(|e| ApiError::Storage(e.to_string()))?
    .map_err(ApiError::from)
}

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Lists all bookmarks in storage order, sanitized.
pub(super) async fn list_bookmarks(
    State(state): State<AppState>,
) -> Result<Json<Vec<Bookmark>>, ApiError> {
    let bookmarks = with_store(state.db.clone(), |store| store.list_all()).await?;
    Ok(Json(bookmarks.into_iter().map(sanitize_bookmark).collect()))
}

/// Fetches one bookmark by id, sanitized. Responds 404 if it doesn't exist.
pub(super) async fn get_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Bookmark>, ApiError> {
    let bookmark = with_store(state.db.clone(), move |store| store.get_by_id(&id))
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(sanitize_bookmark(bookmark)))
}

/// Creates a bookmark. Responds 201 with the stored record and a `Location`
/// header pointing at the new item path.
pub(super) async fn create_bookmark(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateBookmarkPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let new = validate_create(payload)?;

    let bookmark = with_store(state.db.clone(), move |store| store.insert(&new)).await?;
    info!("bookmark with id {} created", bookmark.id);

    let location = format!("{}/{}", BOOKMARKS_PATH, bookmark.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(bookmark),
    ))
}

/// Applies a partial update. Only the supplied fields are written; responds
/// 204 on success.
pub(super) async fn update_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateBookmarkPayload>,
) -> Result<StatusCode, ApiError> {
    let patch = validate_update(payload)?;

    with_store(state.db.clone(), move |store| {
        match store.get_by_id(&id)? {
            Some(_) => store.update(&id, &patch).map(Some),
            None => Ok(None),
        }
    })
    .await?
    .ok_or(ApiError::NotFound)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Removes a bookmark permanently. Responds 204 on success.
pub(super) async fn delete_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let deleted_id = with_store(state.db.clone(), move |store| {
        match store.get_by_id(&id)? {
            Some(_) => store.delete(&id).map(|_| Some(id)),
            None => Ok(None),
        }
    })
    .await?
    .ok_or(ApiError::NotFound)?;

    info!("bookmark with id {} deleted", deleted_id);
    Ok(StatusCode::NO_CONTENT)
}
