pub mod assets;
pub mod auth;
pub mod catalog;
pub mod health;
pub mod reports;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/logout                     logout (requires auth)
///
/// /assets                          list (any role), create (admin)
/// /assets/{id}                     update (manager+), delete (admin)
///
/// /catalog/{kind}                  list (any role), add (admin)
/// /catalog/{kind}/{name}           rename, delete-if-unused (admin)
///
/// /reports/by-location             assets at a location (any role)
/// /reports/low-stock               assets at/below threshold (any role)
///
/// /admin/users                     list, create (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/assets", assets::router())
        .nest("/catalog", catalog::router())
        .nest("/reports", reports::router())
        .nest("/admin", users::router())
}
