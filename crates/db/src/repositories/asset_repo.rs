//! Repository for the `assets` table.
//!
//! Every SELECT recomputes `status` from `quantity` (the persisted column
//! is treated as a stale cache), and every INSERT/UPDATE rewrites it in the
//! same statement so a concurrent reader never observes a quantity/status
//! mismatch.

use sqlx::PgPool;
use stockroom_core::stock::StockStatus;
use stockroom_core::types::DbId;

use crate::models::asset::{Asset, AssetFilter, CreateAsset, UpdateAsset};

/// Column list shared across queries. `status` is derived, never read back.
const COLUMNS: &str = "\
    id, name, serial, category, location, purchase_date, quantity, \
    CASE WHEN quantity = 0 THEN 'out_of_stock' ELSE 'in_stock' END AS status, \
    created_at, updated_at";

/// Provides CRUD operations for the asset ledger.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset, returning the created row with derived status.
    ///
    /// Catalog membership of `category` and `location` is checked by the
    /// caller; this method only persists.
    pub async fn create(pool: &PgPool, input: &CreateAsset) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (name, serial, category, location, purchase_date, quantity, status)
             VALUES ($1, $2, $3, $4, $5, $6,
                     CASE WHEN $6 = 0 THEN 'out_of_stock' ELSE 'in_stock' END)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&input.name)
            .bind(&input.serial)
            .bind(&input.category)
            .bind(&input.location)
            .bind(input.purchase_date)
            .bind(input.quantity)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List assets with optional search and filters, ordered by ID ascending.
    ///
    /// Search is a case-insensitive substring match against name, serial,
    /// or category. Status filters translate to quantity predicates since
    /// status is derived.
    pub async fn list(pool: &PgPool, filter: &AssetFilter) -> Result<Vec<Asset>, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.search.is_some() {
            conditions.push(format!(
                "(name ILIKE ${i} OR serial ILIKE ${i} OR category ILIKE ${i})",
                i = bind_idx
            ));
            bind_idx += 1;
        }
        if let Some(statuses) = &filter.statuses {
            let in_stock = statuses.contains(&StockStatus::InStock);
            let out_of_stock = statuses.contains(&StockStatus::OutOfStock);
            match (in_stock, out_of_stock) {
                (true, true) => {}
                (true, false) => conditions.push("quantity > 0".to_string()),
                (false, true) => conditions.push("quantity = 0".to_string()),
                (false, false) => conditions.push("FALSE".to_string()),
            }
        }
        if filter.locations.is_some() {
            conditions.push(format!("location = ANY(${bind_idx})"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("SELECT {COLUMNS} FROM assets {where_clause} ORDER BY id ASC");

        let mut q = sqlx::query_as::<_, Asset>(&query);
        if let Some(search) = &filter.search {
            q = q.bind(format!("%{search}%"));
        }
        if let Some(locations) = &filter.locations {
            q = q.bind(locations.as_slice());
        }
        q.fetch_all(pool).await
    }

    /// Assets at an exact location, for the by-location report.
    pub async fn list_by_location(
        pool: &PgPool,
        location: &str,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE location = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Asset>(&query)
            .bind(location)
            .fetch_all(pool)
            .await
    }

    /// Assets with `quantity <= threshold`, for the low-stock report.
    pub async fn list_low_stock(
        pool: &PgPool,
        threshold: i64,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE quantity <= $1 ORDER BY id ASC");
        sqlx::query_as::<_, Asset>(&query)
            .bind(threshold)
            .fetch_all(pool)
            .await
    }

    /// Update quantity and/or location. Status is re-derived from the
    /// effective quantity in the same statement, overriding whatever the
    /// stored column held.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAsset,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET
                quantity = COALESCE($2, quantity),
                location = COALESCE($3, location),
                status = CASE WHEN COALESCE($2, quantity) = 0
                         THEN 'out_of_stock' ELSE 'in_stock' END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(input.quantity)
            .bind(input.location.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete an asset by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
