//! Asset ledger models and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stockroom_core::stock::StockStatus;
use stockroom_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `assets` table.
///
/// `status` is the derived stock status, recomputed from `quantity` by
/// every repository query; the persisted column is never read back as-is.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub name: String,
    pub serial: String,
    pub category: String,
    pub location: String,
    pub purchase_date: Option<NaiveDate>,
    pub quantity: i64,
    /// `"in_stock"` or `"out_of_stock"`, always derived from `quantity`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new asset. `status` is deliberately absent: it is
/// derived from `quantity` and cannot be supplied.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAsset {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub serial: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
    pub purchase_date: Option<NaiveDate>,
    #[validate(range(min = 0, message = "quantity must be non-negative"))]
    pub quantity: i64,
}

/// DTO for updating an asset's quantity and/or location. Only non-`None`
/// fields are applied; status is re-derived unconditionally either way.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAsset {
    #[validate(range(min = 0, message = "quantity must be non-negative"))]
    pub quantity: Option<i64>,
    pub location: Option<String>,
}

/// Query parameters for browsing/searching the ledger.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetListParams {
    /// Case-insensitive substring match against name, serial, or category.
    pub search: Option<String>,
    /// Comma-separated status set (`in_stock`, `out_of_stock`).
    pub status: Option<String>,
    /// Comma-separated set of exact location names.
    pub location: Option<String>,
}

/// Parsed, typed filter applied by the repository. Predicates compose as
/// a conjunction; search and filters may be combined in any order.
#[derive(Debug, Clone, Default)]
pub struct AssetFilter {
    pub search: Option<String>,
    pub statuses: Option<Vec<StockStatus>>,
    pub locations: Option<Vec<String>>,
}
