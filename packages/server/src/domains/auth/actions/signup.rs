//! Signup action - creates an identity and issues a first token

use sqlx::PgPool;
use tracing::info;

use crate::common::error::is_unique_violation;
use crate::common::ApiError;
use crate::domains::auth::password;
use crate::domains::auth::{JwtService, TokenResponse};
use crate::domains::user::models::user::User;

/// Register a new user.
///
/// Hashes the password, inserts the user, and returns an access token with
/// login-on-signup semantics. A duplicate email surfaces as `Conflict`; the
/// unique constraint on `users.email` arbitrates concurrent signups.
pub async fn signup(
    email: &str,
    password: &str,
    pool: &PgPool,
    jwt: &JwtService,
) -> Result<TokenResponse, ApiError> {
    let password_hash = password::hash_password(password)?;

    let user = match User::create(email, &password_hash, pool).await {
        Ok(user) => user,
        Err(e) if is_unique_violation(&e) => {
            return Err(ApiError::Conflict("credentials taken".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id = %user.id, "user signed up");

    let access_token = jwt.create_token(user.id, &user.email)?;
    Ok(TokenResponse { access_token })
}
