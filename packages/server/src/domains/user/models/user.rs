use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// User model - SQL persistence layer
///
/// Holds the password hash, so the row struct itself is never serialized;
/// responses go through [`UserProfile`].
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a user's own profile.
///
/// `None` means "leave unchanged"; explicit clearing is not supported.
#[derive(Debug, Default, Clone)]
pub struct UserChanges {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Outward-facing projection of a user, without the password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl User {
    /// Find user by ID
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find user by email
    pub async fn find_by_email(email: &str, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new user
    pub async fn create(email: &str, password_hash: &str, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO users (email, password_hash)
             VALUES ($1, $2)
             RETURNING *",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await
    }

    /// Apply a partial update, leaving absent fields untouched
    pub async fn update(id: Uuid, changes: &UserChanges, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE users
             SET email = COALESCE($2, email),
                 first_name = COALESCE($3, first_name),
                 last_name = COALESCE($4, last_name),
                 updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&changes.email)
        .bind(&changes.first_name)
        .bind(&changes.last_name)
        .fetch_one(pool)
        .await
    }
}
