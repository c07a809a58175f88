//! Bookmark CRUD endpoints, all scoped to the authenticated caller.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::bookmark::actions;
use crate::domains::bookmark::{Bookmark, BookmarkChanges, NewBookmark};
use crate::server::app::AppState;
use crate::server::extract::ApiJson;
use crate::server::middleware::AuthUser;

#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}

#[derive(Debug, Deserialize)]
pub struct EditBookmarkRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

/// GET /bookmarks
pub async fn get_bookmarks(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Bookmark>>, ApiError> {
    let bookmarks = actions::get_bookmarks(auth.user_id, &state.db_pool).await?;
    Ok(Json(bookmarks))
}

/// GET /bookmarks/:id
///
/// Responds 200 with `null` when the bookmark is absent or not the caller's.
pub async fn get_bookmark_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<Bookmark>>, ApiError> {
    let bookmark = actions::get_bookmark_by_id(auth.user_id, id, &state.db_pool).await?;
    Ok(Json(bookmark))
}

/// POST /bookmarks
pub async fn create_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(body): ApiJson<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<Bookmark>), ApiError> {
    if body.title.is_empty() {
        return Err(ApiError::Validation("title must not be empty".to_string()));
    }
    if body.link.is_empty() {
        return Err(ApiError::Validation("link must not be empty".to_string()));
    }

    let new = NewBookmark {
        title: body.title,
        description: body.description,
        link: body.link,
    };

    let bookmark = actions::create_bookmark(auth.user_id, new, &state.db_pool).await?;
    Ok((StatusCode::CREATED, Json(bookmark)))
}

/// PATCH /bookmarks/:id
pub async fn edit_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ApiJson(body): ApiJson<EditBookmarkRequest>,
) -> Result<Json<Bookmark>, ApiError> {
    let changes = BookmarkChanges {
        title: body.title,
        description: body.description,
        link: body.link,
    };

    let bookmark = actions::edit_bookmark(auth.user_id, id, changes, &state.db_pool).await?;
    Ok(Json(bookmark))
}

/// DELETE /bookmarks/:id
pub async fn delete_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    actions::delete_bookmark(auth.user_id, id, &state.db_pool).await?;
    Ok(StatusCode::NO_CONTENT)
}
