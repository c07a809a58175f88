//! Edit-user action - partial update of the caller's own profile

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::common::error::is_unique_violation;
use crate::common::ApiError;
use crate::domains::user::models::user::{User, UserChanges, UserProfile};

/// Apply a partial update to the caller's own record.
///
/// The target is always the caller, so there is no ownership ambiguity.
/// An email that collides with another account surfaces as `Conflict`.
pub async fn edit_user(
    caller_id: Uuid,
    changes: UserChanges,
    pool: &PgPool,
) -> Result<UserProfile, ApiError> {
    let user = match User::update(caller_id, &changes, pool).await {
        Ok(user) => user,
        Err(e) if is_unique_violation(&e) => {
            return Err(ApiError::Conflict("email already in use".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id = %user.id, "user profile updated");

    Ok(user.into())
}
