//! Bookmark read queries, always scoped to the owner

use sqlx::PgPool;
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::bookmark::models::bookmark::Bookmark;

/// List all bookmarks owned by the caller, in storage order.
pub async fn get_bookmarks(owner_id: Uuid, pool: &PgPool) -> Result<Vec<Bookmark>, ApiError> {
    Bookmark::find_all_for_owner(owner_id, pool)
        .await
        .map_err(Into::into)
}

/// Fetch one bookmark by id, scoped to the caller.
///
/// "Not found" and "not yours" both come back as `None`; the distinction is
/// deliberately not exposed on the read path.
pub async fn get_bookmark_by_id(
    owner_id: Uuid,
    bookmark_id: Uuid,
    pool: &PgPool,
) -> Result<Option<Bookmark>, ApiError> {
    Bookmark::find_for_owner(owner_id, bookmark_id, pool)
        .await
        .map_err(Into::into)
}
