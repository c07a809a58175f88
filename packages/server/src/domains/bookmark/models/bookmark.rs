use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Bookmark model - SQL persistence layer
///
/// `user_id` is set once on insert and never updated; ownership is immutable
/// for the lifetime of the record.
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a bookmark. The owner is never part of this;
/// it is forced server-side from the authenticated caller.
#[derive(Debug, Clone)]
pub struct NewBookmark {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}

/// Partial update for a bookmark.
///
/// `None` means "leave unchanged"; explicit clearing is not supported.
#[derive(Debug, Default, Clone)]
pub struct BookmarkChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl Bookmark {
    /// Find bookmark by ID alone (no owner filter)
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM bookmarks WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a bookmark by ID, scoped to its owner
    pub async fn find_for_owner(
        owner_id: Uuid,
        id: Uuid,
        pool: &PgPool,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM bookmarks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Find all bookmarks owned by a user
    pub async fn find_all_for_owner(owner_id: Uuid, pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM bookmarks WHERE user_id = $1")
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a new bookmark for the given owner
    pub async fn insert(owner_id: Uuid, new: &NewBookmark, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO bookmarks (user_id, title, description, link)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(owner_id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.link)
        .fetch_one(pool)
        .await
    }

    /// Apply a partial update, leaving absent fields untouched
    pub async fn update(id: Uuid, changes: &BookmarkChanges, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE bookmarks
             SET title = COALESCE($2, title),
                 description = COALESCE($3, description),
                 link = COALESCE($4, link),
                 updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.link)
        .fetch_one(pool)
        .await
    }

    /// Delete a bookmark by ID
    pub async fn delete(id: Uuid, pool: &PgPool) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
