//! Handlers for the `/catalog/{kind}` resource (categories and locations).
//!
//! Both reference lists share one handler set, keyed by the `kind` path
//! segment (`categories` or `locations`). All mutations are admin only;
//! listing is open to any authenticated role.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use stockroom_core::error::CoreError;
use stockroom_db::models::catalog::{AddCatalogEntry, CatalogEntry, CatalogKind, RenameCatalogEntry};
use stockroom_db::repositories::{CatalogRepo, RemoveOutcome};

use super::validate_input;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/catalog/{kind}
///
/// List all entries in stable lexical order.
pub async fn list_entries(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> AppResult<impl IntoResponse> {
    let kind = parse_kind(&kind)?;
    let entries = CatalogRepo::list(&state.pool, kind).await?;

    Ok(Json(DataResponse { data: entries }))
}

/// POST /api/v1/catalog/{kind}
///
/// Add an entry. Adding an existing name is a deliberate no-op success
/// (idempotent upsert), so callers never see a duplicate error here.
pub async fn add_entry(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(input): Json<AddCatalogEntry>,
) -> AppResult<impl IntoResponse> {
    let kind = parse_kind(&kind)?;
    validate_input(&input)?;

    let inserted = CatalogRepo::add(&state.pool, kind, &input.name).await?;

    tracing::info!(
        kind = %kind,
        name = %input.name,
        inserted,
        user_id = admin.user_id,
        "Catalog entry added"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CatalogEntry { name: input.name },
        }),
    ))
}

/// PUT /api/v1/catalog/{kind}/{name}
///
/// Rename an entry in place. The new name is propagated to every asset row
/// referencing the old one, in the same transaction.
pub async fn rename_entry(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path((kind, name)): Path<(String, String)>,
    Json(input): Json<RenameCatalogEntry>,
) -> AppResult<impl IntoResponse> {
    let kind = parse_kind(&kind)?;
    validate_input(&input)?;

    let renamed = CatalogRepo::rename(&state.pool, kind, &name, &input.new_name).await?;
    if !renamed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: kind.entity(),
            key: name,
        }));
    }

    tracing::info!(
        kind = %kind,
        old_name = %name,
        new_name = %input.new_name,
        user_id = admin.user_id,
        "Catalog entry renamed"
    );

    Ok(Json(DataResponse {
        data: CatalogEntry {
            name: input.new_name,
        },
    }))
}

/// DELETE /api/v1/catalog/{kind}/{name}
///
/// Delete an entry, refusing with 409 `IN_USE` while any asset still
/// references it.
pub async fn remove_entry(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path((kind, name)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let kind = parse_kind(&kind)?;

    match CatalogRepo::remove(&state.pool, kind, &name).await? {
        RemoveOutcome::Removed => {
            tracing::info!(kind = %kind, name = %name, user_id = admin.user_id, "Catalog entry removed");
            Ok(StatusCode::NO_CONTENT)
        }
        RemoveOutcome::InUse => Err(AppError::Core(CoreError::InUse {
            entity: kind.entity(),
            key: name,
        })),
        RemoveOutcome::Missing => Err(AppError::Core(CoreError::NotFound {
            entity: kind.entity(),
            key: name,
        })),
    }
}

/// Parse the `{kind}` path segment, rejecting anything but the two lists.
fn parse_kind(raw: &str) -> Result<CatalogKind, AppError> {
    raw.parse::<CatalogKind>().map_err(AppError::BadRequest)
}
