//! Handlers for the `/auth` resource (login, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use stockroom_core::error::CoreError;
use stockroom_core::types::DbId;
use stockroom_db::repositories::UserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. The failure response is identical
/// for an unknown username and a wrong password, so the endpoint cannot be
/// used to enumerate accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(invalid_credentials());
    }

    let access_token =
        generate_access_token(user.id, &user.username, &user.role, &state.config.jwt)
            .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    Ok(Json(DataResponse {
        data: LoginResponse {
            access_token,
            expires_in: state.config.jwt.access_token_expiry_mins * 60,
            user: UserInfo {
                id: user.id,
                username: user.username,
                role: user.role,
            },
        },
    }))
}

/// POST /api/v1/auth/logout
///
/// Acknowledge end of session. The bearer token is the session state, held
/// by the caller; the client discards it on 204.
pub async fn logout(auth_user: AuthUser) -> AppResult<StatusCode> {
    tracing::info!(user_id = auth_user.user_id, "User logged out");
    Ok(StatusCode::NO_CONTENT)
}

/// The uniform, cause-undifferentiated login failure.
fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}
