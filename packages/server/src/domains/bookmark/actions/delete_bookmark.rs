//! Delete-bookmark action - ownership-checked removal

use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::bookmark::models::bookmark::Bookmark;

/// Delete a bookmark the caller owns.
///
/// Same fetch-then-check pattern as edit: absent and not-owned are both
/// `Forbidden` to the caller, distinguishable only in the audit log.
pub async fn delete_bookmark(
    owner_id: Uuid,
    bookmark_id: Uuid,
    pool: &PgPool,
) -> Result<(), ApiError> {
    let bookmark = Bookmark::find_by_id(bookmark_id, pool)
        .await?
        .ok_or(ApiError::Forbidden)?;

    if bookmark.user_id != owner_id {
        warn!(
            bookmark_id = %bookmark_id,
            owner_id = %bookmark.user_id,
            caller_id = %owner_id,
            "delete denied: caller does not own bookmark"
        );
        return Err(ApiError::Forbidden);
    }

    Bookmark::delete(bookmark_id, pool).await?;

    info!(bookmark_id = %bookmark_id, user_id = %owner_id, "bookmark deleted");

    Ok(())
}
