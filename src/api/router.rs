//! Router creation and configuration.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_bookmark, delete_bookmark, get_bookmark, health, list_bookmarks, update_bookmark,
    AppState,
};
use crate::database::Database;

/// Collection path for the bookmark resource. Item paths append `/<id>`.
pub const BOOKMARKS_PATH: &str = "/api/bookmarks";

/// Creates the service router over a shared database.
pub fn create_router(db: Arc<Database>) -> Router {
    let state = AppState { db };

    Router::new()
        .route("/health", get(health))
        .route(BOOKMARKS_PATH, get(list_bookmarks).post(create_bookmark))
        .route(
            &format!("{}/:id", BOOKMARKS_PATH),
            get(get_bookmark)
                .patch(update_bookmark)
                .delete(delete_bookmark),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
