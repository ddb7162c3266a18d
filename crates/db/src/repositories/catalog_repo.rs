//! Repository for the `categories` and `locations` reference lists.
//!
//! One implementation serves both tables, selected by [`CatalogKind`].
//! Table and column names come from the kind's static strings, never from
//! user input, so the `format!`-assembled SQL stays injection-free.

use sqlx::PgPool;

use crate::models::catalog::{CatalogEntry, CatalogKind};

/// Result of a guarded catalog delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The entry existed, had no referencing assets, and was deleted.
    Removed,
    /// At least one asset still references the name; nothing was deleted.
    InUse,
    /// No entry with that name exists.
    Missing,
}

/// Provides operations on the category/location reference lists.
pub struct CatalogRepo;

impl CatalogRepo {
    /// Idempotent add: inserting an existing name is a no-op, not an error.
    ///
    /// Returns `true` if a new row was inserted, `false` if the name was
    /// already present.
    pub async fn add(pool: &PgPool, kind: CatalogKind, name: &str) -> Result<bool, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (name) VALUES ($1) ON CONFLICT (name) DO NOTHING",
            kind.table()
        );
        let result = sqlx::query(&query).bind(name).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether an entry with this exact name exists.
    pub async fn contains(
        pool: &PgPool,
        kind: CatalogKind,
        name: &str,
    ) -> Result<bool, sqlx::Error> {
        let query = format!("SELECT EXISTS (SELECT 1 FROM {} WHERE name = $1)", kind.table());
        let (exists,): (bool,) = sqlx::query_as(&query).bind(name).fetch_one(pool).await?;
        Ok(exists)
    }

    /// List all entries in stable lexical order.
    pub async fn list(pool: &PgPool, kind: CatalogKind) -> Result<Vec<CatalogEntry>, sqlx::Error> {
        let query = format!("SELECT name FROM {} ORDER BY name ASC", kind.table());
        sqlx::query_as::<_, CatalogEntry>(&query).fetch_all(pool).await
    }

    /// Rename an entry in place, propagating the new name to every asset row
    /// that references the old one. Both updates commit in one transaction
    /// so references never dangle.
    ///
    /// Returns `false` if no entry named `old_name` exists. Renaming onto an
    /// already-taken name fails with the table's unique violation.
    pub async fn rename(
        pool: &PgPool,
        kind: CatalogKind,
        old_name: &str,
        new_name: &str,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("UPDATE {} SET name = $2 WHERE name = $1", kind.table());
        let result = sqlx::query(&query)
            .bind(old_name)
            .bind(new_name)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        let query = format!(
            "UPDATE assets SET {col} = $2, updated_at = NOW() WHERE {col} = $1",
            col = kind.asset_column()
        );
        sqlx::query(&query)
            .bind(old_name)
            .bind(new_name)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Delete an entry only if nothing references it. The reference check
    /// and the delete run as one conditional statement, so two concurrent
    /// removes (or a concurrent asset insert) cannot interleave between
    /// check and delete.
    pub async fn remove(
        pool: &PgPool,
        kind: CatalogKind,
        name: &str,
    ) -> Result<RemoveOutcome, sqlx::Error> {
        let query = format!(
            "DELETE FROM {table} WHERE name = $1
             AND NOT EXISTS (SELECT 1 FROM assets WHERE {col} = $1)",
            table = kind.table(),
            col = kind.asset_column()
        );
        let result = sqlx::query(&query).bind(name).execute(pool).await?;
        if result.rows_affected() > 0 {
            return Ok(RemoveOutcome::Removed);
        }

        // The delete matched nothing: either the entry is referenced or it
        // never existed. Disambiguate for the caller's error message.
        if Self::contains(pool, kind, name).await? {
            Ok(RemoveOutcome::InUse)
        } else {
            Ok(RemoveOutcome::Missing)
        }
    }
}
