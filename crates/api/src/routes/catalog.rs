//! Route definitions for the catalog reference lists.
//!
//! `{kind}` is `categories` or `locations`; both share one handler set.
//!
//! ```text
//! GET    /{kind}          -> list_entries (any role)
//! POST   /{kind}          -> add_entry (admin, idempotent)
//! PUT    /{kind}/{name}   -> rename_entry (admin, propagating)
//! DELETE /{kind}/{name}   -> remove_entry (admin, delete-if-unused)
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{kind}", get(catalog::list_entries).post(catalog::add_entry))
        .route(
            "/{kind}/{name}",
            put(catalog::rename_entry).delete(catalog::remove_entry),
        )
}
