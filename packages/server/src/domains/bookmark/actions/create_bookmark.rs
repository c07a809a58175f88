//! Create-bookmark action

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::bookmark::models::bookmark::{Bookmark, NewBookmark};

/// Create a bookmark owned by the caller.
///
/// The owner id comes from the verified token, never from the request body.
pub async fn create_bookmark(
    owner_id: Uuid,
    new: NewBookmark,
    pool: &PgPool,
) -> Result<Bookmark, ApiError> {
    let bookmark = Bookmark::insert(owner_id, &new, pool).await?;

    info!(bookmark_id = %bookmark.id, user_id = %owner_id, "bookmark created");

    Ok(bookmark)
}
