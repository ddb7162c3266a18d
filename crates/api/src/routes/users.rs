//! Route definitions for user management, mounted at `/admin`.
//!
//! ```text
//! GET  /users   -> list_users (admin only)
//! POST /users   -> create_user (admin only)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/users", get(users::list_users).post(users::create_user))
}
