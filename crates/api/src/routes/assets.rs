//! Route definitions for the asset ledger.
//!
//! ```text
//! GET    /        -> list_assets (any role)
//! POST   /        -> create_asset (admin)
//! PUT    /{id}    -> update_asset (manager or admin)
//! DELETE /{id}    -> delete_asset (admin)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets).post(assets::create_asset))
        .route(
            "/{id}",
            axum::routing::put(assets::update_asset).delete(assets::delete_asset),
        )
}
