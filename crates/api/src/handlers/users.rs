//! Handlers for the `/admin/users` resource (user management).
//!
//! All handlers require the admin tier via [`RequireAdmin`]. No update or
//! delete operation is offered for users.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use stockroom_core::access::Role;
use stockroom_core::error::CoreError;
use stockroom_db::models::user::{CreateUser, UserResponse};
use stockroom_db::repositories::UserRepo;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Minimum password length enforced on user creation.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Request body for `POST /admin/users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    /// Role name: `viewer`, `manager`, or `admin`.
    pub role: String,
}

/// POST /api/v1/admin/users
///
/// Create a new user. Validates the role and password strength, hashes the
/// password, and returns a safe [`UserResponse`] with 201 Created. A taken
/// username is a 409 `CONFLICT`.
pub async fn create_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    if input.username.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "username is required".into(),
        )));
    }

    let role: Role = input
        .role
        .parse()
        .map_err(|e: String| AppError::Core(CoreError::Validation(e)))?;

    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Username already taken: {}",
            input.username
        ))));
    }

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        username: input.username,
        password_hash: hashed,
        role: role.as_str().to_string(),
    };

    let user = UserRepo::create(&state.pool, &create_dto).await?;

    tracing::info!(
        new_user_id = user.id,
        role = %user.role,
        created_by = admin.user_id,
        "User created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(&user),
        }),
    ))
}

/// GET /api/v1/admin/users
///
/// List all users, without password digests.
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;
    let responses: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();

    Ok(Json(DataResponse { data: responses }))
}
