//! Handlers for the `/assets` resource (the asset ledger).
//!
//! Reads are open to any authenticated role. Quantity/location updates
//! require manager or admin; create and delete require admin. Status is
//! never accepted from input -- the repository derives it from quantity
//! at every boundary.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use stockroom_core::error::CoreError;
use stockroom_core::stock::StockStatus;
use stockroom_core::types::DbId;
use stockroom_db::models::asset::{AssetFilter, AssetListParams, CreateAsset, UpdateAsset};
use stockroom_db::models::catalog::CatalogKind;
use stockroom_db::repositories::{AssetRepo, CatalogRepo};

use super::validate_input;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAdmin, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/assets
///
/// Browse the ledger with optional `search`, `status`, and `location`
/// query parameters. Filters compose as a conjunction.
pub async fn list_assets(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<AssetListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = parse_filter(&params)?;
    let assets = AssetRepo::list(&state.pool, &filter).await?;

    Ok(Json(DataResponse { data: assets }))
}

/// POST /api/v1/assets
///
/// Register a new asset. Admin only. The referenced category and location
/// must already exist in the catalog.
pub async fn create_asset(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateAsset>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    ensure_catalog_member(&state, CatalogKind::Category, &input.category).await?;
    ensure_catalog_member(&state, CatalogKind::Location, &input.location).await?;

    let asset = AssetRepo::create(&state.pool, &input).await?;

    tracing::info!(asset_id = asset.id, user_id = admin.user_id, "Asset created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// PUT /api/v1/assets/{id}
///
/// Update an asset's quantity and/or location. Manager or admin. Status is
/// re-derived from the effective quantity regardless of input.
pub async fn update_asset(
    RequireManager(user): RequireManager,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAsset>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    if let Some(location) = &input.location {
        ensure_catalog_member(&state, CatalogKind::Location, location).await?;
    }

    let asset = AssetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            key: id.to_string(),
        }))?;

    tracing::info!(asset_id = id, user_id = user.user_id, "Asset updated");

    Ok(Json(DataResponse { data: asset }))
}

/// DELETE /api/v1/assets/{id}
///
/// Permanently remove an asset. Admin only. No soft-delete, no recovery.
pub async fn delete_asset(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = AssetRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            key: id.to_string(),
        }));
    }

    tracing::info!(asset_id = id, user_id = admin.user_id, "Asset deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Parse comma-separated query parameters into a typed [`AssetFilter`].
fn parse_filter(params: &AssetListParams) -> Result<AssetFilter, AppError> {
    let statuses = match &params.status {
        None => None,
        Some(raw) => {
            let parsed: Result<Vec<StockStatus>, _> = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::parse)
                .collect();
            Some(parsed.map_err(|e| AppError::Core(CoreError::Validation(e)))?)
        }
    };

    let locations = params.location.as_ref().map(|raw| {
        raw.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
    });

    Ok(AssetFilter {
        search: params.search.clone(),
        statuses,
        locations,
    })
}

/// Reject asset writes that reference a name absent from the catalog.
async fn ensure_catalog_member(
    state: &AppState,
    kind: CatalogKind,
    name: &str,
) -> Result<(), AppError> {
    if !CatalogRepo::contains(&state.pool, kind, name).await? {
        return Err(AppError::Core(CoreError::Validation(format!(
            "unknown {}: {name}",
            kind.asset_column()
        ))));
    }
    Ok(())
}
