//! Profile endpoints for the authenticated caller.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::common::validate::is_well_formed_email;
use crate::common::ApiError;
use crate::domains::user::actions;
use crate::domains::user::{UserChanges, UserProfile};
use crate::server::app::AppState;
use crate::server::extract::ApiJson;
use crate::server::middleware::AuthUser;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// GET /users/get-self
pub async fn get_self(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = actions::get_self(auth.user_id, &state.db_pool).await?;
    Ok(Json(profile))
}

/// PATCH /users/edit
pub async fn edit_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(body): ApiJson<EditUserRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    if let Some(email) = &body.email {
        if !is_well_formed_email(email) {
            return Err(ApiError::Validation(
                "email must be a valid email address".to_string(),
            ));
        }
    }

    let changes = UserChanges {
        email: body.email,
        first_name: body.first_name,
        last_name: body.last_name,
    };

    let profile = actions::edit_user(auth.user_id, changes, &state.db_pool).await?;
    Ok(Json(profile))
}
