//! Signin action - verifies credentials and issues a token

use sqlx::PgPool;
use tracing::debug;

use crate::common::ApiError;
use crate::domains::auth::password;
use crate::domains::auth::{JwtService, TokenResponse};
use crate::domains::user::models::user::User;

/// Authenticate a user by email and password.
///
/// Unknown email and wrong password return the same `InvalidCredentials`
/// error so callers cannot probe which of the two occurred.
pub async fn signin(
    email: &str,
    password: &str,
    pool: &PgPool,
    jwt: &JwtService,
) -> Result<TokenResponse, ApiError> {
    let user = User::find_by_email(email, pool)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !password::verify_password(password, &user.password_hash) {
        return Err(ApiError::InvalidCredentials);
    }

    debug!(user_id = %user.id, "user signed in");

    let access_token = jwt.create_token(user.id, &user.email)?;
    Ok(TokenResponse { access_token })
}
