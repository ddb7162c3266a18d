//! Route definitions for the canned reports.
//!
//! ```text
//! GET /by-location?location=&format=      -> by_location
//! GET /low-stock?threshold=&format=       -> low_stock
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/by-location", get(reports::by_location))
        .route("/low-stock", get(reports::low_stock))
}
