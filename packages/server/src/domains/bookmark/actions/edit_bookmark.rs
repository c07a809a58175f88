//! Edit-bookmark action - ownership-checked partial update

use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::bookmark::models::bookmark::{Bookmark, BookmarkChanges};

/// Apply a partial update to a bookmark the caller owns.
///
/// The record is fetched by id alone first; a missing record and an owner
/// mismatch both surface as the same `Forbidden` error, but the mismatch is
/// logged for audit before the update runs.
pub async fn edit_bookmark(
    owner_id: Uuid,
    bookmark_id: Uuid,
    changes: BookmarkChanges,
    pool: &PgPool,
) -> Result<Bookmark, ApiError> {
    let bookmark = Bookmark::find_by_id(bookmark_id, pool)
        .await?
        .ok_or(ApiError::Forbidden)?;

    if bookmark.user_id != owner_id {
        warn!(
            bookmark_id = %bookmark_id,
            owner_id = %bookmark.user_id,
            caller_id = %owner_id,
            "edit denied: caller does not own bookmark"
        );
        return Err(ApiError::Forbidden);
    }

    Bookmark::update(bookmark_id, &changes, pool)
        .await
        .map_err(Into::into)
}
