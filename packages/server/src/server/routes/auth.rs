//! Signup and signin endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::common::validate::is_well_formed_email;
use crate::common::ApiError;
use crate::domains::auth::{actions, TokenResponse};
use crate::server::app::AppState;
use crate::server::extract::ApiJson;

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<AuthRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    validate_credentials(&body)?;

    let tokens = actions::signup(
        &body.email,
        &body.password,
        &state.db_pool,
        &state.jwt_service,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(tokens)))
}

/// POST /auth/signin
pub async fn signin(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<AuthRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    validate_credentials(&body)?;

    let tokens = actions::signin(
        &body.email,
        &body.password,
        &state.db_pool,
        &state.jwt_service,
    )
    .await?;

    Ok(Json(tokens))
}

fn validate_credentials(body: &AuthRequest) -> Result<(), ApiError> {
    if body.email.is_empty() {
        return Err(ApiError::Validation("email must not be empty".to_string()));
    }
    if !is_well_formed_email(&body.email) {
        return Err(ApiError::Validation(
            "email must be a valid email address".to_string(),
        ));
    }
    if body.password.is_empty() {
        return Err(ApiError::Validation(
            "password must not be empty".to_string(),
        ));
    }
    Ok(())
}
