//! Get-self action - reads the authenticated caller's own profile

use sqlx::PgPool;
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::user::models::user::{User, UserProfile};

/// Return the caller's own profile.
///
/// The caller id comes from a verified token; a missing row means the token
/// no longer matches a live account, which is treated as an auth failure.
pub async fn get_self(caller_id: Uuid, pool: &PgPool) -> Result<UserProfile, ApiError> {
    let user = User::find_by_id(caller_id, pool)
        .await?
        .ok_or(ApiError::InvalidToken)?;

    Ok(user.into())
}
