//! Handlers for the `/reports` resource: the two canned reports.
//!
//! Both reports are read-only projections over the ledger with freshly
//! derived status, available to any authenticated role as JSON or as a
//! downloadable CSV via `?format=csv`.

use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use stockroom_db::models::asset::Asset;
use stockroom_db::repositories::AssetRepo;

use crate::error::{AppError, AppResult};
use crate::export::assets_to_csv;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /reports/by-location`.
#[derive(Debug, Deserialize)]
pub struct ByLocationParams {
    pub location: String,
    /// `csv` for a downloadable export; anything else (or absent) is JSON.
    pub format: Option<String>,
}

/// Query parameters for `GET /reports/low-stock`.
#[derive(Debug, Deserialize)]
pub struct LowStockParams {
    /// Overrides the configured threshold for this request.
    pub threshold: Option<i64>,
    pub format: Option<String>,
}

/// GET /api/v1/reports/by-location
///
/// All assets at an exact location.
pub async fn by_location(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ByLocationParams>,
) -> AppResult<Response> {
    let assets = AssetRepo::list_by_location(&state.pool, &params.location).await?;
    render(assets, params.format.as_deref())
}

/// GET /api/v1/reports/low-stock
///
/// All assets with `quantity <= threshold`. The threshold defaults to the
/// configured policy value (5 unless overridden by `LOW_STOCK_THRESHOLD`).
pub async fn low_stock(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<LowStockParams>,
) -> AppResult<Response> {
    let threshold = params.threshold.unwrap_or(state.config.low_stock_threshold);
    let assets = AssetRepo::list_low_stock(&state.pool, threshold).await?;
    render(assets, params.format.as_deref())
}

/// Shape the report as JSON or CSV depending on the `format` parameter.
fn render(assets: Vec<Asset>, format: Option<&str>) -> AppResult<Response> {
    if format == Some("csv") {
        let body = assets_to_csv(&assets)
            .map_err(|e| AppError::InternalError(format!("CSV serialization error: {e}")))?;
        Ok((
            [
                (CONTENT_TYPE, "text/csv; charset=utf-8"),
                (CONTENT_DISPOSITION, "attachment; filename=\"report.csv\""),
            ],
            body,
        )
            .into_response())
    } else {
        Ok(Json(DataResponse { data: assets }).into_response())
    }
}
